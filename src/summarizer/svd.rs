//! Thin singular value decomposition of the term-sentence matrix.
//!
//! The input is stored column-major (`columns[j][i]` is row `i` of column `j`),
//! which for the term-sentence matrix means one column per sentence. Only the
//! singular values and right singular vectors are returned; LSA ranking never
//! needs the left vectors.

use super::types::SummarizerError;
use nalgebra::{DMatrix, SVD};

#[derive(Debug, Clone)]
pub struct Svd {
    /// Singular values in descending order, `min(rows, cols)` of them.
    pub singular_values: Vec<f64>,
    /// `right_vectors[k]` is the right singular vector paired with `singular_values[k]`.
    pub right_vectors: Vec<Vec<f64>>,
}

impl Svd {
    /// Component `k` of the right singular vector space for column `col`,
    /// i.e. `V[col][k]`.
    pub fn v(&self, col: usize, k: usize) -> f64 {
        self.right_vectors[k][col]
    }
}

pub fn decompose(columns: &[Vec<f64>]) -> Result<Svd, SummarizerError> {
    let n = columns.len();
    let m = columns.first().map_or(0, Vec::len);

    if columns.iter().flatten().any(|x| !x.is_finite()) {
        return Err(SummarizerError::NonFiniteMatrix);
    }
    if m == 0 || n == 0 {
        return Ok(Svd {
            singular_values: Vec::new(),
            right_vectors: Vec::new(),
        });
    }

    let matrix = DMatrix::from_fn(m, n, |i, j| columns[j][i]);
    // Zero iterations means "until convergence"; `None` is only returned on a cap.
    let svd = SVD::try_new(matrix, false, true, f64::EPSILON, 0).ok_or_else(|| {
        tracing::warn!("SVD did not converge on a {}x{} matrix", m, n);
        SummarizerError::SvdDidNotConverge
    })?;
    let v_t = svd.v_t.ok_or(SummarizerError::SvdDidNotConverge)?;

    let mut order: Vec<(usize, f64)> = svd.singular_values.iter().copied().enumerate().collect();
    order.sort_by(|a, b| b.1.total_cmp(&a.1));

    let singular_values = order.iter().map(|&(_, s)| s).collect();
    let right_vectors = order
        .iter()
        .map(|&(k, _)| v_t.row(k).iter().copied().collect())
        .collect();

    Ok(Svd {
        singular_values,
        right_vectors,
    })
}
