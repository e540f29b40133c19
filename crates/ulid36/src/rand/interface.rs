/// A trait for random sources.
///
/// This abstraction allows you to plug in a real random source or a mocked
/// random source in tests. Identifier generation uses `RandSource<f64>`,
/// whose draws must lie in `[0, 1)`.
///
/// Any `Fn() -> T` closure is a `RandSource<T>`, so a plain function works
/// wherever a source is expected.
///
/// # Example
/// ```
/// use ulid36::RandSource;
///
/// struct FixedRand;
/// impl RandSource<f64> for FixedRand {
///     fn rand(&self) -> f64 {
///         0.25
///     }
/// }
///
/// let rng = FixedRand;
/// assert_eq!(rng.rand(), 0.25);
///
/// let closure = || 0.75;
/// assert_eq!(closure.rand(), 0.75);
/// ```
pub trait RandSource<T> {
    /// Returns one random draw.
    fn rand(&self) -> T;
}

impl<T, F> RandSource<T> for F
where
    F: Fn() -> T,
{
    fn rand(&self) -> T {
        self()
    }
}
