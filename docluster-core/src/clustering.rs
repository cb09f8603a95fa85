//! Placeholder cluster assignment
//!
//! Labels are drawn uniformly at random. They carry no meaning and exist only
//! so the search request has a cluster filter to forward; the real grouping
//! is the backend's job.

use crate::model::{ClusterAssignment, ClusterLabel};

/// Label every point of an embedding with a random cluster in `0..cluster_count`
///
/// `random` must yield values in `[0, 1)`, e.g. `js_sys::Math::random`.
pub fn assign_placeholder_clusters<R>(
    len: usize,
    cluster_count: u32,
    mut random: R,
) -> ClusterAssignment
where
    R: FnMut() -> f64,
{
    let max_label = cluster_count.saturating_sub(1);
    (0..len)
        .map(|id| {
            let draw = (random() * f64::from(cluster_count)).floor();
            ClusterLabel {
                id,
                cluster: (draw.max(0.0) as u32).min(max_label),
            }
        })
        .collect::<Vec<_>>()
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_label_per_point_in_order() {
        let mut seed = 0.0;
        let assignment = assign_placeholder_clusters(7, 5, || {
            seed = (seed + 0.37) % 1.0;
            seed
        });

        assert_eq!(assignment.len(), 7);
        for (i, label) in assignment.iter().enumerate() {
            assert_eq!(label.id, i);
            assert!(label.cluster < 5);
        }
    }

    #[test]
    fn test_random_draw_maps_onto_labels() {
        let draws = [0.0, 0.19, 0.2, 0.5, 0.99];
        let mut it = draws.iter().copied();
        let assignment = assign_placeholder_clusters(5, 5, || it.next().unwrap_or(0.0));
        let clusters: Vec<u32> = assignment.iter().map(|l| l.cluster).collect();
        assert_eq!(clusters, vec![0, 0, 1, 2, 4]);
    }

    #[test]
    fn test_out_of_range_draws_are_clamped() {
        let assignment = assign_placeholder_clusters(2, 5, || 1.0);
        assert!(assignment.iter().all(|l| l.cluster == 4));

        let assignment = assign_placeholder_clusters(2, 5, || -0.5);
        assert!(assignment.iter().all(|l| l.cluster == 0));
    }

    #[test]
    fn test_empty_embedding() {
        let assignment = assign_placeholder_clusters(0, 5, || 0.5);
        assert!(assignment.is_empty());
    }
}
