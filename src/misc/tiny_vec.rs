use std::ops::Deref;

/// Fixed-capacity inline vector. Slots past `len` hold `T::default()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TinyVec<T, const N: usize>
where
    T: Copy + Default,
{
    buf: [T; N],
    len: u8,
}

impl<T, const N: usize> TinyVec<T, N>
where
    T: Copy + Default,
{
    pub fn new() -> Self {
        const { assert!(N <= 255, "TinyVec supports up to 255 elements") }
        TinyVec { buf: [T::default(); N], len: 0 }
    }

    /// Appends `val`, handing it back if the vector is full.
    pub fn push(&mut self, val: T) -> Result<(), T> {
        if self.len as usize == N {
            return Err(val);
        }
        self.buf[self.len as usize] = val;
        self.len += 1;
        Ok(())
    }

    /// Removes the element at `idx`, shifting the tail left.
    pub fn remove(&mut self, idx: usize) -> Option<T> {
        let len = self.len as usize;
        if idx >= len {
            return None;
        }
        let val = self.buf[idx];
        self.buf.copy_within(idx + 1..len, idx);
        self.len -= 1;
        self.buf[self.len as usize] = T::default();
        Some(val)
    }

    pub fn clear(&mut self) {
        self.buf = [T::default(); N];
        self.len = 0;
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<T: Copy + Default, const N: usize> Default for TinyVec<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy + Default, const N: usize> Deref for TinyVec<T, N> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.buf[..self.len as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_until_full() {
        let mut v: TinyVec<u8, 2> = TinyVec::new();
        assert_eq!(v.push(1), Ok(()));
        assert_eq!(v.push(2), Ok(()));
        assert_eq!(v.push(3), Err(3));
        assert_eq!(&*v, &[1, 2]);
    }

    #[test]
    fn remove_keeps_order() {
        let mut v: TinyVec<u8, 4> = TinyVec::new();
        for x in [3, 5, 3, 6] {
            v.push(x).unwrap();
        }
        assert_eq!(v.remove(1), Some(5));
        assert_eq!(&*v, &[3, 3, 6]);
        assert_eq!(v.remove(3), None);
        assert_eq!(v.remove(2), Some(6));
        assert_eq!(v.len(), 2);
        assert_eq!(v.len(), v.iter().count());
        v.clear();
        assert!(v.is_empty());
    }
}
