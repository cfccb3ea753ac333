//! IdGenerator port - ID 生成の抽象化
//!
//! クライアントが gallery_id を指定しなかった場合に使われます。
//! テスト容易性のために、trait として抽象化しています。
//!
//! # 実装
//! - **Base36IdGenerator**: ミリ秒タイムスタンプ + ランダム接尾辞（base-36）

use rand::Rng;

use crate::domain::GalleryId;
use crate::ports::Clock;

const BASE36_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Length of the random part appended to the timestamp.
pub const RANDOM_SUFFIX_LEN: usize = 5;

/// IdGenerator は外部状態なしでギャラリー ID を生成
///
/// # 一意性
/// - 暗号学的な保証はない
/// - 同一ミリ秒 + 接尾辞の衝突で重複しうる（許容済みのリスク）
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> GalleryId;
}

/// Base36IdGenerator は `base36(now_ms) + base36(random)` を生成
///
/// Clock を使うので、FixedClock で timestamp 部分を固定できます。
pub struct Base36IdGenerator<C> {
    clock: C,
}

impl<C: Clock> Base36IdGenerator<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }
}

impl<C: Clock> IdGenerator for Base36IdGenerator<C> {
    fn generate(&self) -> GalleryId {
        let millis = u64::try_from(self.clock.now_millis()).unwrap_or(0);
        let mut id = to_base36(millis);

        let mut rng = rand::thread_rng();
        id.extend((0..RANDOM_SUFFIX_LEN).map(|_| BASE36_DIGITS[rng.gen_range(0..36)] as char));

        GalleryId::new(id)
    }
}

/// Lowercase base-36 rendering of `n`.
pub fn to_base36(mut n: u64) -> String {
    if n == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while n > 0 {
        digits.push(BASE36_DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    digits.reverse();
    String::from_utf8(digits).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{FixedClock, SystemClock};
    use chrono::{TimeZone, Utc};
    use std::collections::HashSet;

    #[test]
    fn base36_encoding() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
        assert_eq!(to_base36(1_700_000_000_000), "loyw3v28");
    }

    #[test]
    fn generates_distinct_ids() {
        let id_gen = Base36IdGenerator::new(SystemClock);
        let ids: HashSet<_> = (0..200).map(|_| id_gen.generate()).collect();
        // 5 random base-36 chars: collisions among 200 are vanishingly unlikely
        assert!(ids.len() >= 199);
    }

    #[test]
    fn timestamp_prefix_follows_the_clock() {
        let fixed_time = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let id_gen = Base36IdGenerator::new(FixedClock::new(fixed_time));

        let id = id_gen.generate();
        let prefix = to_base36(fixed_time.timestamp_millis() as u64);

        assert!(id.as_str().starts_with(&prefix));
        assert_eq!(id.as_str().len(), prefix.len() + RANDOM_SUFFIX_LEN);
        assert!(
            id.as_str()
                .bytes()
                .all(|b| b.is_ascii_digit() || b.is_ascii_lowercase())
        );
    }
}
