/// This trait represents the sentence buffer used by the Parser. We provide
/// implementations for `[u8; N]` ([FixedBuffer]) and for `&mut [u8]`
/// ([FixedLinearBuffer]). If you want to use your own struct as the sentence
/// buffer you can implement this trait.
///
/// Implementations must never grow past `max_capacity`: the parser relies on
/// `push` failing to detect an over-long sentence.
pub trait UnderlyingBuffer {
    /// Removes all elements from the buffer.
    fn clear(&mut self);

    /// Returns the number of elements currently stored in the buffer.
    fn len(&self) -> usize;

    /// Returns the fixed capacity of this buffer.
    fn max_capacity(&self) -> usize;

    /// Appends one byte. Returns `false`, leaving the buffer untouched, when it is full.
    fn push(&mut self, byte: u8) -> bool;

    /// The bytes stored so far.
    fn as_slice(&self) -> &[u8];

    /// Returns whether the buffer is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Holds a mutable reference to a fixed byte array
pub struct FixedLinearBuffer<'a> {
    buffer: &'a mut [u8],
    len: usize,
}

impl<'a> FixedLinearBuffer<'a> {
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self {
            buffer: buf,
            len: 0,
        }
    }
}

impl UnderlyingBuffer for FixedLinearBuffer<'_> {
    fn clear(&mut self) {
        self.len = 0;
    }

    fn len(&self) -> usize {
        self.len
    }

    fn max_capacity(&self) -> usize {
        self.buffer.len()
    }

    fn push(&mut self, byte: u8) -> bool {
        if self.len >= self.buffer.len() {
            return false;
        }
        self.buffer[self.len] = byte;
        self.len += 1;
        true
    }

    fn as_slice(&self) -> &[u8] {
        &self.buffer[..self.len]
    }
}

/// An owned, fixed-size sentence buffer with a capacity known at compile time.
///
/// This struct owns its data in a `[u8; N]` array, making it a drop-in
/// replacement for `FixedLinearBuffer` where owned data is preferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixedBuffer<const N: usize> {
    buffer: [u8; N],
    len: usize,
}

impl<const N: usize> FixedBuffer<N> {
    /// Creates a new, empty `FixedBuffer`.
    pub const fn new() -> Self {
        Self {
            buffer: [0; N],
            len: 0,
        }
    }
}

impl<const N: usize> Default for FixedBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> UnderlyingBuffer for FixedBuffer<N> {
    fn clear(&mut self) {
        self.len = 0;
    }

    fn len(&self) -> usize {
        self.len
    }

    fn max_capacity(&self) -> usize {
        N
    }

    fn push(&mut self, byte: u8) -> bool {
        if self.len >= N {
            return false;
        }
        self.buffer[self.len] = byte;
        self.len += 1;
        true
    }

    fn as_slice(&self) -> &[u8] {
        &self.buffer[..self.len]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill<T: UnderlyingBuffer>(buf: &mut T, data: &[u8]) -> usize {
        data.iter().take_while(|&&b| buf.push(b)).count()
    }

    #[test]
    fn flb_push_until_full() {
        let mut storage = [0; 4];
        let mut buf = FixedLinearBuffer::new(&mut storage);
        assert!(buf.is_empty());
        assert_eq!(fill(&mut buf, b"$GPGGA"), 4);
        assert!(!buf.push(b'X'));
        assert_eq!(buf.as_slice(), b"$GPG");
        assert_eq!(buf.len(), 4);
    }

    #[test]
    fn flb_clear() {
        let mut storage = [0; 8];
        let mut buf = FixedLinearBuffer::new(&mut storage);
        fill(&mut buf, b"$GP");
        buf.clear();
        assert!(buf.is_empty());
        assert_eq!(buf.as_slice(), b"");
        assert_eq!(buf.max_capacity(), 8);
    }

    #[test]
    fn fixed_buffer_push_until_full() {
        let mut buf = FixedBuffer::<3>::new();
        assert_eq!(fill(&mut buf, b"$GPRMC"), 3);
        assert!(!buf.push(b'M'));
        assert_eq!(buf.as_slice(), b"$GP");
        buf.clear();
        assert!(buf.push(b'$'));
        assert_eq!(buf.len(), 1);
    }

    #[test]
    fn zero_capacity_buffer_rejects_everything() {
        let mut buf = FixedBuffer::<0>::default();
        assert_eq!(buf.max_capacity(), 0);
        assert!(!buf.push(b'$'));
    }
}
