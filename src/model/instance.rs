//! Problem instance: demand vector plus cost data.

use super::costs::Costs;
use crate::network::NetworkError;

/// A parsed problem instance.
///
/// Holds the signed per-node demand vector and the three cost matrices.
/// By convention the last node is the aggregate source: its demand is
/// positive (supply) and every consumer's demand is negative, so the
/// vector sums to zero.
///
/// Parsing files into this shape is the caller's job; the search core
/// only ever sees an `Instance`.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Instance {
    demand: Vec<i64>,
    costs: Costs,
}

impl Instance {
    /// Creates an instance from an already-signed demand vector.
    ///
    /// Fails with [`NetworkError::DimensionMismatch`] if the demand length
    /// differs from the cost matrices' dimension.
    pub fn new(demand: Vec<i64>, costs: Costs) -> Result<Self, NetworkError> {
        if demand.len() != costs.size() {
            return Err(NetworkError::DimensionMismatch {
                left: demand.len(),
                right: costs.size(),
            });
        }
        Ok(Self { demand, costs })
    }

    /// Creates an instance from raw customer consumption figures.
    ///
    /// Each customer entry is negated (consumption is negative demand) and
    /// the aggregate supply — the sum of all consumptions — is appended as
    /// the final node, which becomes the source. The resulting vector sums
    /// to zero. The cost matrices must already cover the source node, i.e.
    /// their dimension is `customer_demand.len() + 1`.
    pub fn from_customer_demand(
        customer_demand: &[i64],
        costs: Costs,
    ) -> Result<Self, NetworkError> {
        let mut demand: Vec<i64> = customer_demand.iter().map(|&d| -d).collect();
        let supply: i64 = customer_demand.iter().sum();
        demand.push(supply);
        Self::new(demand, costs)
    }

    /// Number of vertices, the source included.
    pub fn vertex_count(&self) -> usize {
        self.demand.len()
    }

    /// Index of the source node (always the last node).
    pub fn source(&self) -> usize {
        self.demand.len() - 1
    }

    /// The signed per-node demand vector.
    pub fn demand(&self) -> &[i64] {
        &self.demand
    }

    /// The three cost matrices.
    pub fn costs(&self) -> &Costs {
        &self.costs
    }

    /// True if supply exactly covers consumption (demand sums to zero).
    pub fn is_balanced(&self) -> bool {
        self.demand.iter().sum::<i64>() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SquareMatrix;

    fn costs(n: usize) -> Costs {
        Costs::new(
            SquareMatrix::new(n),
            SquareMatrix::new(n),
            SquareMatrix::new(n),
        )
        .expect("valid costs")
    }

    #[test]
    fn test_from_customer_demand() {
        let instance = Instance::from_customer_demand(&[3, 2], costs(3)).unwrap();
        assert_eq!(instance.demand(), &[-3, -2, 5]);
        assert_eq!(instance.source(), 2);
        assert_eq!(instance.vertex_count(), 3);
        assert!(instance.is_balanced());
    }

    #[test]
    fn test_demand_length_mismatch() {
        let err = Instance::new(vec![-1, 1], costs(3)).unwrap_err();
        assert_eq!(err, NetworkError::DimensionMismatch { left: 2, right: 3 });
    }

    #[test]
    fn test_unbalanced_demand_detected() {
        let instance = Instance::new(vec![-1, -1, 3], costs(3)).unwrap();
        assert!(!instance.is_balanced());
    }
}
