/// Sign activation: maps a real-valued score to a class label in {-1, +1}.
///
/// A score of exactly zero maps to +1, so boundary cases break toward the
/// positive class rather than an undecided state.
pub fn sign(score: f64) -> f64 {
    if score >= 0.0 {
        1.0
    } else {
        -1.0
    }
}
