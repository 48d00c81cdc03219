//! Linear system solver behind the calculator the icon stands for.
//!
//! Systems are square: one coefficient row and one constant per unknown.
//! Solving uses Gaussian elimination with partial pivoting on the augmented
//! matrix, then checks the values against the original equations.

use crate::error::SolverError;
use std::fmt::Write;
use tracing::debug;

/// Magnitudes below this count as zero.
pub const EPSILON: f64 = 1e-10;

/// Largest residual accepted when verifying a unique solution.
const VERIFY_TOLERANCE: f64 = EPSILON * 100.0;

/// Classification of a solvable system.
#[derive(Clone, Debug, PartialEq)]
pub enum Solution {
    /// Exactly one solution, one value per unknown.
    Unique(Vec<f64>),
    /// The equations contradict each other.
    NoSolution,
    /// At least one unknown is free.
    Infinite,
}

fn is_zero(value: f64) -> bool {
    value.abs() < EPSILON
}

/// Solves `coefficients · x = constants`.
pub fn solve(coefficients: &[Vec<f64>], constants: &[f64]) -> Result<Solution, SolverError> {
    let n = coefficients.len();
    if n == 0 {
        return Err(SolverError::Empty);
    }
    if constants.len() != n {
        return Err(SolverError::LengthMismatch { rows: n, constants: constants.len() });
    }
    if let Some((row, r)) = coefficients.iter().enumerate().find(|(_, r)| r.len() != n) {
        return Err(SolverError::NotSquare { row, len: r.len(), expected: n });
    }

    let mut augmented: Vec<Vec<f64>> = coefficients
        .iter()
        .zip(constants)
        .map(|(row, &b)| row.iter().copied().chain(std::iter::once(b)).collect())
        .collect();

    let rank = eliminate(&mut augmented);
    debug!(n, rank, "forward elimination done");

    // Rows past the rank read [0 ... 0 | c]; any c != 0 is a contradiction.
    if augmented[rank..].iter().any(|row| !is_zero(row[n])) {
        return Ok(Solution::NoSolution);
    }
    if rank < n {
        return Ok(Solution::Infinite);
    }

    // Full rank: the matrix is unit upper triangular with pivots on the diagonal.
    let mut values = vec![0.0; n];
    for i in (0..n).rev() {
        let tail: f64 = (i + 1..n).map(|j| augmented[i][j] * values[j]).sum();
        values[i] = augmented[i][n] - tail;
    }

    verify(coefficients, constants, &values)?;
    Ok(Solution::Unique(values))
}

/// Reduces the augmented matrix in place to row echelon form with unit
/// pivots and returns its rank. Columns without a usable pivot are skipped.
fn eliminate(m: &mut [Vec<f64>]) -> usize {
    let n = m.len();
    let mut rank = 0;
    for col in 0..n {
        if rank == n {
            break;
        }
        let Some(pivot_row) = find_pivot(m, col, rank) else {
            continue;
        };
        m.swap(rank, pivot_row);

        let pivot = m[rank][col];
        for v in m[rank].iter_mut() {
            *v /= pivot;
        }

        let (upper, lower) = m.split_at_mut(rank + 1);
        let pivot_row = &upper[rank];
        for row in lower.iter_mut() {
            let factor = row[col];
            if is_zero(factor) {
                continue;
            }
            for (v, p) in row.iter_mut().zip(pivot_row) {
                *v -= factor * p;
            }
        }
        rank += 1;
    }
    rank
}

/// Row at or below `start` with the largest magnitude in `col`, if it is
/// not zero.
fn find_pivot(m: &[Vec<f64>], col: usize, start: usize) -> Option<usize> {
    let (row, max) = (start..m.len())
        .map(|i| (i, m[i][col].abs()))
        .fold((start, m[start][col].abs()), |best, cur| if cur.1 > best.1 { cur } else { best });
    (max > EPSILON).then_some(row)
}

fn verify(coefficients: &[Vec<f64>], constants: &[f64], values: &[f64]) -> Result<(), SolverError> {
    for (equation, (row, &b)) in coefficients.iter().zip(constants).enumerate() {
        let sum: f64 = row.iter().zip(values).map(|(a, x)| a * x).sum();
        let residual = (sum - b).abs();
        if residual > VERIFY_TOLERANCE {
            return Err(SolverError::Verification { equation, residual });
        }
    }
    Ok(())
}

/// Determinant of a square matrix by elimination with partial pivoting.
/// Empty, non-square, and singular matrices give 0.
pub fn determinant(matrix: &[Vec<f64>]) -> f64 {
    let n = matrix.len();
    if n == 0 || matrix.iter().any(|row| row.len() != n) {
        return 0.0;
    }

    let mut m = matrix.to_vec();
    let mut det = 1.0;
    for i in 0..n {
        let pivot_row = (i..n)
            .max_by(|&a, &b| m[a][i].abs().total_cmp(&m[b][i].abs()))
            .unwrap_or(i);
        if is_zero(m[pivot_row][i]) {
            return 0.0;
        }
        if pivot_row != i {
            m.swap(i, pivot_row);
            det = -det;
        }
        det *= m[i][i];

        for k in i + 1..n {
            let factor = m[k][i] / m[i][i];
            for j in i..n {
                m[k][j] -= factor * m[i][j];
            }
        }
    }
    det
}

/// Portuguese result text shown by the calculator for a solve attempt.
pub fn describe(result: &Result<Solution, SolverError>) -> String {
    match result {
        Ok(Solution::Unique(values)) => {
            let mut text = String::from("Solução encontrada:\n\n");
            for (i, v) in values.iter().enumerate() {
                let _ = writeln!(text, "x{} = {:.6}", i + 1, v);
            }
            text
        }
        Ok(Solution::NoSolution) => "Sistema inconsistente.\nNão há solução.".to_string(),
        Ok(Solution::Infinite) => "Sistema indeterminado.\nInfinitas soluções.".to_string(),
        Err(_) => "Erro no cálculo.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unique(result: Result<Solution, SolverError>) -> Vec<f64> {
        match result {
            Ok(Solution::Unique(values)) => values,
            other => panic!("expected a unique solution, got {other:?}"),
        }
    }

    fn assert_close(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-9, "{actual:?} != {expected:?}");
        }
    }

    #[test]
    fn unique_2x2() {
        let values = unique(solve(&[vec![2.0, 3.0], vec![1.0, -1.0]], &[7.0, 1.0]));
        assert_close(&values, &[2.0, 1.0]);
    }

    #[test]
    fn unique_3x3() {
        let a = [vec![1.0, 2.0, 3.0], vec![2.0, -1.0, 1.0], vec![3.0, 0.0, -1.0]];
        let values = unique(solve(&a, &[9.0, 8.0, 3.0]));
        assert_close(&values, &[2.0, -1.0, 3.0]);
    }

    #[test]
    fn identity_returns_constants() {
        let values = unique(solve(&[vec![1.0, 0.0], vec![0.0, 1.0]], &[5.0, 3.0]));
        assert_close(&values, &[5.0, 3.0]);
    }

    #[test]
    fn needs_row_swap_for_zero_leading_pivot() {
        let values = unique(solve(&[vec![0.0, 1.0], vec![1.0, 0.0]], &[4.0, 9.0]));
        assert_close(&values, &[9.0, 4.0]);
    }

    #[test]
    fn inconsistent_system() {
        let a = [vec![1.0, 2.0], vec![2.0, 4.0]];
        assert_eq!(solve(&a, &[3.0, 7.0]), Ok(Solution::NoSolution));
    }

    #[test]
    fn dependent_system() {
        let a = [vec![1.0, 2.0], vec![2.0, 4.0]];
        assert_eq!(solve(&a, &[3.0, 6.0]), Ok(Solution::Infinite));
    }

    #[test]
    fn zero_column_leaves_a_free_unknown() {
        let a = [vec![0.0, 1.0], vec![0.0, 2.0]];
        assert_eq!(solve(&a, &[1.0, 2.0]), Ok(Solution::Infinite));
        assert_eq!(solve(&a, &[1.0, 3.0]), Ok(Solution::NoSolution));
    }

    #[test]
    fn malformed_input() {
        assert_eq!(solve(&[], &[]), Err(SolverError::Empty));
        assert_eq!(
            solve(&[vec![1.0, 2.0], vec![3.0, 4.0]], &[1.0]),
            Err(SolverError::LengthMismatch { rows: 2, constants: 1 })
        );
        assert_eq!(
            solve(&[vec![1.0, 2.0], vec![3.0]], &[1.0, 2.0]),
            Err(SolverError::NotSquare { row: 1, len: 1, expected: 2 })
        );
    }

    #[test]
    fn determinants() {
        assert!((determinant(&[vec![1.0, 2.0], vec![3.0, 4.0]]) + 2.0).abs() < 1e-12);
        assert!((determinant(&[vec![0.0, 1.0], vec![1.0, 0.0]]) + 1.0).abs() < 1e-12);
        assert_eq!(determinant(&[vec![1.0, 2.0], vec![2.0, 4.0]]), 0.0);
        assert_eq!(determinant(&[vec![1.0, 2.0]]), 0.0);
        assert_eq!(determinant(&[]), 0.0);
    }

    #[test]
    fn result_text() {
        let solved = solve(&[vec![2.0, 3.0], vec![1.0, -1.0]], &[7.0, 1.0]);
        assert_eq!(describe(&solved), "Solução encontrada:\n\nx1 = 2.000000\nx2 = 1.000000\n");
        assert_eq!(describe(&Ok(Solution::NoSolution)), "Sistema inconsistente.\nNão há solução.");
        assert_eq!(describe(&Ok(Solution::Infinite)), "Sistema indeterminado.\nInfinitas soluções.");
        assert_eq!(describe(&Err(SolverError::Empty)), "Erro no cálculo.");
    }
}
