//! Debug rendering shared by `List` and `Queue`
//!
//! Both containers render the same bounded diagnostic format:
//!
//! ```text
//! List[i32](len=7){
//! 	1,
//! 	2,
//! 	3,
//! 	4,
//! 	5,
//! 	...
//! }
//! ```
//!
//! Each element goes through [`Stringable`], so element types can opt into
//! their own text while everything else falls back to `Debug`. The format is
//! for humans only and is never parsed back.

use std::any;
use std::fmt;

/// Textual rendering capability used by the container debug output.
///
/// The provided method falls back to `Debug`; implement it to customize how a
/// value appears inside a rendered container.
///
/// There is no blanket impl: a container only implements `Display` when its
/// element type implements this trait, so your own types opt in with
/// `impl Stringable for MyType {}` to get the `Debug` fallback.
///
/// ```rust
/// use collectkit::{List, Stringable};
/// use std::fmt;
///
/// #[derive(Debug, Clone)]
/// struct Point(i32, i32);
///
/// impl Stringable for Point {
///     fn stringify(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "({}, {})", self.0, self.1)
///     }
/// }
///
/// let list = List::from(vec![Point(1, 2)]);
/// assert!(list.to_string().contains("\t(1, 2),\n"));
/// ```
pub trait Stringable: fmt::Debug {
    /// Write the textual form of `self`
    fn stringify(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

macro_rules! stringable_via_display {
    ($($t:ty),* $(,)?) => {
        $(
            impl Stringable for $t {
                fn stringify(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::Display::fmt(self, f)
                }
            }
        )*
    };
}

stringable_via_display!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, str,
    String,
);

impl<T: Stringable + ?Sized> Stringable for &T {
    fn stringify(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).stringify(f)
    }
}

impl<T: Stringable + ?Sized> Stringable for Box<T> {
    fn stringify(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).stringify(f)
    }
}

impl<T: fmt::Debug> Stringable for Option<T> {}
impl<T: fmt::Debug> Stringable for Vec<T> {}
impl<T: fmt::Debug, const N: usize> Stringable for [T; N] {}
impl<A: fmt::Debug, B: fmt::Debug> Stringable for (A, B) {}
impl<A: fmt::Debug, B: fmt::Debug, C: fmt::Debug> Stringable for (A, B, C) {}
impl Stringable for serde_json::Value {
    fn stringify(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Element type name with module paths stripped, e.g. `Vec<String>` rather
/// than `alloc::vec::Vec<alloc::string::String>`
pub fn short_type_name<T: ?Sized>() -> String {
    fn flush(out: &mut String, token: &mut String) {
        match token.rfind("::") {
            Some(pos) => out.push_str(&token[pos + 2..]),
            None => out.push_str(token),
        }
        token.clear();
    }

    let full = any::type_name::<T>();
    let mut out = String::with_capacity(full.len());
    let mut token = String::new();
    for ch in full.chars() {
        if ch.is_alphanumeric() || ch == '_' || ch == ':' {
            token.push(ch);
        } else {
            flush(&mut out, &mut token);
            out.push(ch);
        }
    }
    flush(&mut out, &mut token);
    out
}

/// Display adapter writing the bounded preview of a container
pub(crate) struct Preview<'a, E, I> {
    name: &'a str,
    len: usize,
    items: I,
    limit: usize,
    _element: std::marker::PhantomData<&'a E>,
}

impl<'a, E, I> Preview<'a, E, I>
where
    E: Stringable + 'a,
    I: Iterator<Item = &'a E> + Clone,
{
    pub(crate) fn new(name: &'a str, len: usize, items: I, limit: usize) -> Self {
        Self {
            name,
            len,
            items,
            limit,
            _element: std::marker::PhantomData,
        }
    }
}

impl<'a, E, I> fmt::Display for Preview<'a, E, I>
where
    E: Stringable + 'a,
    I: Iterator<Item = &'a E> + Clone,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}](len={}){{\n", self.name, short_type_name::<E>(), self.len)?;
        for item in self.items.clone().take(self.limit) {
            f.write_str("\t")?;
            item.stringify(f)?;
            f.write_str(",\n")?;
        }
        if self.len > self.limit {
            f.write_str("\t...\n")?;
        }
        f.write_str("}")
    }
}
