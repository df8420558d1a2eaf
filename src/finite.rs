use nalgebra::DMatrix;

/// Locate NaN/±inf entries, the rejection analogue of "not a numeric array".
pub trait NonFinite {
    type Idx;
    fn non_finite_idx(&self) -> Option<Self::Idx>;
}

impl NonFinite for [f64] {
    type Idx = usize;
    fn non_finite_idx(&self) -> Option<usize> {
        self.iter().position(|c| !c.is_finite())
    }
}

impl NonFinite for DMatrix<f64> {
    type Idx = (usize, usize);
    fn non_finite_idx(&self) -> Option<(usize, usize)> {
        for i in 0..self.nrows() {
            for j in 0..self.ncols() {
                if !self[(i, j)].is_finite() {
                    return Some((i, j));
                }
            }
        }
        None
    }
}
