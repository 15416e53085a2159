// src/network/centrality.rs
//! Normalized degree centrality.

/// Fraction of all other members a member is directly connected to.
/// Defined as 0 when the network has one member or none.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn degree_centrality(degree: usize, total_members: usize) -> f64 {
    if total_members <= 1 {
        return 0.0;
    }
    degree as f64 / (total_members - 1) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lone_member_scores_zero() {
        assert_eq!(degree_centrality(0, 1), 0.0);
        assert_eq!(degree_centrality(0, 0), 0.0);
    }

    #[test]
    fn test_fully_connected_scores_one() {
        assert_eq!(degree_centrality(3, 4), 1.0);
    }

    #[test]
    fn test_partial_connection() {
        let score = degree_centrality(2, 5);
        assert!((score - 0.5).abs() < f64::EPSILON);
    }
}
