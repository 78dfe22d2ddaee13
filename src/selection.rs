use crate::Page;

/// Either one value or an ordered list of values.
///
/// Endpoints take a selection of pages, ids, terms, or dates,
/// and give back a selection of the same shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<T> {
    /// A single value
    One(T),

    /// A list of values
    Many(Vec<T>),
}

impl<T> Selection<T> {
    /// Get the number of values.
    pub fn len(&self) -> usize {
        match self {
            Self::One(_) => 1,
            Self::Many(values) => values.len(),
        }
    }

    /// Returns true if this is an empty list.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if this is a single value.
    pub fn is_one(&self) -> bool {
        matches!(self, Self::One(_))
    }

    /// Get the single value, if this is one.
    pub fn into_one(self) -> Option<T> {
        match self {
            Self::One(value) => Some(value),
            Self::Many(_) => None,
        }
    }

    /// Get the values as a list, whatever the shape.
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::One(value) => vec![value],
            Self::Many(values) => values,
        }
    }

    /// Iterate over the values in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        match self {
            Self::One(value) => std::slice::from_ref(value).iter(),
            Self::Many(values) => values.iter(),
        }
    }

    /// Borrow each value, keeping the shape.
    pub fn as_ref(&self) -> Selection<&T> {
        match self {
            Self::One(value) => Selection::One(value),
            Self::Many(values) => Selection::Many(values.iter().collect()),
        }
    }

    /// Map each value, keeping the shape.
    pub fn map<U, F>(self, mut f: F) -> Selection<U>
    where
        F: FnMut(T) -> U,
    {
        match self {
            Self::One(value) => Selection::One(f(value)),
            Self::Many(values) => Selection::Many(values.into_iter().map(f).collect()),
        }
    }

    /// Map each value with a fallible function, keeping the shape.
    ///
    /// Stops at the first error.
    pub fn try_map<U, E, F>(self, mut f: F) -> Result<Selection<U>, E>
    where
        F: FnMut(T) -> Result<U, E>,
    {
        match self {
            Self::One(value) => Ok(Selection::One(f(value)?)),
            Self::Many(values) => values
                .into_iter()
                .map(f)
                .collect::<Result<_, _>>()
                .map(Selection::Many),
        }
    }
}

impl<'a, T> IntoIterator for &'a Selection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for Selection<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

/// Implement scalar, `Vec`, slice, and array conversions from `$src` into a `Selection<$dst>`.
macro_rules! impl_from {
    ([$($lt:lifetime),*] $src:ty => $dst:ty, $convert:expr) => {
        impl<$($lt),*> From<$src> for Selection<$dst> {
            fn from(value: $src) -> Self {
                Self::One(($convert)(value))
            }
        }

        impl<$($lt),*> From<Vec<$src>> for Selection<$dst> {
            fn from(values: Vec<$src>) -> Self {
                Self::Many(values.into_iter().map($convert).collect())
            }
        }

        impl<'s, $($lt),*> From<&'s [$src]> for Selection<$dst> {
            fn from(values: &'s [$src]) -> Self {
                Self::Many(values.iter().cloned().map($convert).collect())
            }
        }

        impl<$($lt,)* const N: usize> From<[$src; N]> for Selection<$dst> {
            fn from(values: [$src; N]) -> Self {
                Self::Many(values.into_iter().map($convert).collect())
            }
        }
    };
}

impl_from!([] Page => Page, |page: Page| page);
impl_from!([] u32 => Page, Page::Number);

impl_from!([] String => String, |value: String| value);
impl_from!(['a] &'a str => String, |value: &str| value.to_string());
impl_from!([] u64 => String, |value: u64| itoa::Buffer::new().format(value).to_string());

impl From<std::ops::RangeInclusive<u32>> for Selection<Page> {
    fn from(pages: std::ops::RangeInclusive<u32>) -> Self {
        Self::Many(pages.map(Page::Number).collect())
    }
}
