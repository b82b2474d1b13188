//! Local identity allocation for backend records that arrive without one.
//!
//! List rendering needs a stable, locally unique id per entry. When the
//! backend omits both of its id keys the mapping layer calls this instead
//! of improvising in display code. Uniqueness is statistical (uuid v4);
//! nothing cryptographic is required.

use uuid::Uuid;

/// Allocate a locally unique entity id.
pub fn allocate_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocated_ids_are_non_empty_and_distinct() {
        let a = allocate_id();
        let b = allocate_id();
        assert!(!a.is_empty());
        assert_ne!(a, b);
    }
}
