use super::*;

impl<T, const N: usize> Array<T, N> {
    /// Returns an iterator over the elements of the array.
    /// Storage is always contiguous, so this is a plain walk in row-major order.
    pub fn elements(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Returns the row-major storage.
    pub fn as_slice(&self) -> &[T] {
        self.data.as_slice()
    }

    /// Copies the elements out as a flat row-major vector.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.data.as_ref().clone()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a Array<T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements()
    }
}
