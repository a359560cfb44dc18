use std::ops::{Add, Div, Mul, Range, Sub};

pub fn map_t_of_range_a_to_range_b<T>(t: T, range_a: Range<T>, range_b: Range<T>) -> T
where
    T: Copy + Sub<Output = T> + Div<Output = T> + Add<Output = T> + Mul<Output = T>,
{
    let slope = (range_b.end - range_b.start) / (range_a.end - range_a.start);
    range_b.start + slope * (t - range_a.start)
}

/// `t = 0` gives `range.start`, `t = 1` gives `range.end`. Not clamped.
pub fn lerp(t: f64, range: Range<f64>) -> f64 {
    range.start + (range.end - range.start) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_range() {
        assert_eq!(map_t_of_range_a_to_range_b(0.0, -1.0..1.0, 10.0..20.0), 15.0);
        assert_eq!(map_t_of_range_a_to_range_b(-1.0, -1.0..1.0, 10.0..20.0), 10.0);
        assert_eq!(map_t_of_range_a_to_range_b(1.0, -1.0..1.0, 10.0..20.0), 20.0);
        assert_eq!(map_t_of_range_a_to_range_b(5, 0..10, 0..100), 50);
    }

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(0.0, 0.060..0.065), 0.060);
        assert_eq!(lerp(1.0, 0.0..4.0), 4.0);
        assert_eq!(lerp(0.25, 0.0..4.0), 1.0);
        assert_eq!(lerp(1.5, 0.0..2.0), 3.0);
    }
}
