use std::collections::HashMap;

use crate::measures::distribution::Pmf;
use crate::measures::error::MeasureError;

/// Shannon entropy of a PMF in bits.
///
/// `H = -Σ p(x) log2 p(x)` over the stored support; zero-probability tuples
/// are never stored, so no guard against `log2(0)` is needed. An empty or
/// single-entry PMF has entropy exactly `0`.
pub fn entropy(pmf: &Pmf) -> f64 {
    let mut h = 0.0;
    for (_, p) in pmf.iter() {
        h -= p * p.log2();
    }
    h
}

/// Mutual information of an arity-2 joint PMF in bits.
///
/// Marginals are derived by summing the joint over each axis, then
/// `I(X; Y) = H(X) + H(Y) - H(X, Y)`. The plug-in estimate can dip a few
/// ulps below zero on independent data because the joint entropy is summed
/// over a different support than the marginals; that floating noise is
/// clamped to `0`. Real negative values cannot occur for a valid joint PMF.
pub fn mutual_information(joint: &Pmf) -> Result<f64, MeasureError> {
    if joint.arity() != 2 {
        return Err(MeasureError::WrongArity(joint.arity()));
    }

    let mut p_x: HashMap<i32, f64> = HashMap::new();
    let mut p_y: HashMap<i32, f64> = HashMap::new();
    for (key, p) in joint.iter() {
        *p_x.entry(key[0]).or_insert(0.0) += p;
        *p_y.entry(key[1]).or_insert(0.0) += p;
    }

    let marginal_entropy = |marginal: &HashMap<i32, f64>| -> f64 {
        marginal.values().map(|&p| -p * p.log2()).sum()
    };

    let mi = marginal_entropy(&p_x) + marginal_entropy(&p_y) - entropy(joint);
    Ok(mi.max(0.0))
}
