use std::iter::FusedIterator;

/// An iterator over the identifiers of a [`StructuredPath`](crate::StructuredPath)'s subpath.
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    pub(crate) path: &'a str,
    pub(crate) head: usize,
}

impl<'a> Iterator for Segments<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.head >= self.path.len() {
            None?
        }
        let rest = &self.path[self.head..];
        let tail = rest.find('/').unwrap_or(rest.len());

        self.head += tail + 1;
        Some(&rest[..tail])
    }
}

impl FusedIterator for Segments<'_> {}
