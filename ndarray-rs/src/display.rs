use super::*;
use std::fmt;

impl<T: fmt::Display, const N: usize> fmt::Display for Array<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // zero-sized arrays print flat, their dims can be arbitrarily large
        if self.size() == 0 {
            return write!(f, "[]");
        }
        write_nested(f, self.as_slice(), self.shape())
    }
}

fn write_nested<T: fmt::Display>(f: &mut fmt::Formatter<'_>, data: &[T], shape: &[usize]) -> fmt::Result {
    let Some((&dim, rest)) = shape.split_first() else {
        return write!(f, "{}", data[0]);
    };

    write!(f, "[")?;
    let chunk = data.len() / dim;
    for i in 0..dim {
        if i > 0 {
            write!(f, ", ")?;
        }
        write_nested(f, &data[i * chunk..(i + 1) * chunk], rest)?;
    }
    write!(f, "]")
}
