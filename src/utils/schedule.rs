//! 时间区间工具
//!
//! 所有冲突判断统一使用半开区间语义：[s1,e1) 与 [s2,e2) 冲突
//! 当且仅当 s1 < e2 且 s2 < e1，端点相接（e1 == s2）不算冲突。

/// 半开区间重叠判断
pub fn intervals_overlap<T: PartialOrd>(s1: &T, e1: &T, s2: &T, e2: &T) -> bool {
    s1 < e2 && s2 < e1
}

/// "HH:MM" 时刻重叠判断（补零的 24 小时制，字典序即时间序）
pub fn times_overlap(s1: &str, e1: &str, s2: &str, e2: &str) -> bool {
    intervals_overlap(&s1, &e1, &s2, &e2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_overlapping_times() {
        assert!(times_overlap("09:00", "10:00", "09:30", "10:30"));
        assert!(times_overlap("09:30", "10:30", "09:00", "10:00"));
        // 完全包含
        assert!(times_overlap("09:00", "12:00", "10:00", "11:00"));
        // 完全相同
        assert!(times_overlap("09:00", "10:00", "09:00", "10:00"));
    }

    #[test]
    fn test_touching_endpoints_do_not_overlap() {
        assert!(!times_overlap("09:00", "10:00", "10:00", "11:00"));
        assert!(!times_overlap("10:00", "11:00", "09:00", "10:00"));
    }

    #[test]
    fn test_disjoint_times() {
        assert!(!times_overlap("09:00", "10:00", "14:00", "15:00"));
    }

    #[test]
    fn test_timestamp_intervals() {
        let t = |h: u32| Utc.with_ymd_and_hms(2026, 1, 10, h, 0, 0).unwrap();
        assert!(intervals_overlap(&t(9), &t(11), &t(10), &t(12)));
        assert!(!intervals_overlap(&t(9), &t(10), &t(10), &t(11)));
        assert!(!intervals_overlap(&t(12), &t(13), &t(9), &t(10)));
    }
}
