//! Opaque argument values bound positionally to `$1, $2, ...`.

use std::fmt;
use std::sync::Arc;
use tokio_postgres::types::ToSql;

/// A single argument value.
///
/// The assembler never looks inside an `Arg`; only its position in [`Args`]
/// matters. Cloning shares the underlying value.
#[derive(Clone)]
pub struct Arg(Arc<dyn ToSql + Send + Sync>);

impl Arg {
    pub fn new<T: ToSql + Send + Sync + 'static>(value: T) -> Self {
        Arg(Arc::new(value))
    }

    /// Borrow as the trait object `tokio-postgres` binds.
    pub fn as_to_sql(&self) -> &(dyn ToSql + Sync) {
        &*self.0 as &(dyn ToSql + Sync)
    }
}

impl fmt::Debug for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

/// Ordered argument list; element `k - 1` binds to `$k`.
#[derive(Clone, Debug, Default)]
pub struct Args {
    values: Vec<Arg>,
}

impl Args {
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Append a value.
    pub fn push<T: ToSql + Send + Sync + 'static>(&mut self, value: T) {
        self.values.push(Arg::new(value));
    }

    pub fn push_arg(&mut self, arg: Arg) {
        self.values.push(arg);
    }

    /// Append every argument of `other`, in order.
    pub fn extend(&mut self, other: &Args) {
        self.values.extend(other.values.iter().cloned());
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Arg> {
        self.values.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Arg> {
        self.values.iter()
    }

    /// Arguments as references compatible with `tokio-postgres`.
    ///
    /// ```ignore
    /// let (sql, args) = assembler.build_query();
    /// let rows = client.query(&sql, &args.as_refs()).await?;
    /// ```
    pub fn as_refs(&self) -> Vec<&(dyn ToSql + Sync)> {
        self.values.iter().map(Arg::as_to_sql).collect()
    }
}

impl<'a> IntoIterator for &'a Args {
    type Item = &'a Arg;
    type IntoIter = std::slice::Iter<'a, Arg>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_shows_wrapped_value() {
        let mut args = Args::new();
        args.push(18_i32);
        args.push("active");
        let shown: Vec<String> = args.iter().map(|a| format!("{a:?}")).collect();
        assert_eq!(shown, vec!["18", "\"active\""]);
    }

    #[test]
    fn extend_preserves_order() {
        let mut head = Args::new();
        head.push(1_i64);
        let mut tail = Args::new();
        tail.push(2_i64);
        tail.push(3_i64);

        head.extend(&tail);
        assert_eq!(head.len(), 3);
        assert_eq!(format!("{:?}", head.get(2).unwrap()), "3");
        assert_eq!(head.as_refs().len(), 3);
        // `tail` is shared, not moved
        assert_eq!(tail.len(), 2);
    }
}
