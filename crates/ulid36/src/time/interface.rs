/// A trait for time sources that return a wall-clock or mocked timestamp.
///
/// This abstraction allows you to plug in the real system clock or a fixed
/// time source in tests. Generators resolve a missing seed time through it.
///
/// The unit is **milliseconds** since the Unix epoch.
///
/// # Example
///
/// ```
/// use ulid36::TimeSource;
///
/// struct FixedTime;
/// impl TimeSource<u64> for FixedTime {
///     fn current_millis(&self) -> u64 {
///         1234
///     }
/// }
///
/// let time = FixedTime;
/// assert_eq!(time.current_millis(), 1234);
/// ```
pub trait TimeSource<T> {
    /// Returns the current time in milliseconds since the Unix epoch.
    fn current_millis(&self) -> T;
}
