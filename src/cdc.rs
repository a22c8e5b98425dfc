//! Content-defined chunking (CDC) with a rolling checksum.
//!
//! Boundaries are chosen by content rather than position: after every byte an
//! rsync-style rolling checksum over the last [`CDC_WINDOW_SIZE`] bytes is tested
//! against [`CDC_BOUNDARY_MASK`]. An insertion or deletion therefore only moves the
//! boundaries next to the edit; later chunks keep their bytes.
//!
//! **Parameters are fixed and must never change**, otherwise Data-IDs computed
//! by different builds stop agreeing.
//!
//! Two front ends share one boundary scanner and yield identical chunks:
//! - [`slice_chunks`] borrows an in-memory buffer (zero-copy)
//! - [`data_chunks`] pulls from any [`Read`] incrementally

use std::io::{self, Read};
use std::iter::FusedIterator;
use std::mem;

use tracing::trace;

/// Bytes covered by the rolling checksum.
pub const CDC_WINDOW_SIZE: usize = 48;

/// No boundary is declared before a chunk reaches this size.
pub const CDC_MIN_SIZE: usize = 32;

/// A chunk is cut unconditionally at this size.
pub const CDC_MAX_SIZE: usize = 4096;

/// Low checksum bits that must all be set to declare a boundary
/// (ten bits: roughly one boundary per KiB of varied input).
pub const CDC_BOUNDARY_MASK: u32 = 0x3FF;

/// Block size used when pulling from a reader.
const READ_BLOCK_SIZE: usize = 64 * 1024;

/// rsync-style weak checksum `(a, b)` over a sliding byte window.
///
/// The window starts zero-filled and keeps rolling across chunk boundaries, so a
/// boundary decision depends only on the trailing window and the size limits.
#[derive(Debug, Clone)]
struct RollingChecksum {
    window: [u8; CDC_WINDOW_SIZE],
    pos: usize,
    a: u32,
    b: u32,
}

impl RollingChecksum {
    fn new() -> Self {
        Self {
            window: [0; CDC_WINDOW_SIZE],
            pos: 0,
            a: 0,
            b: 0,
        }
    }

    fn roll(&mut self, byte: u8) {
        let old = u32::from(self.window[self.pos]);
        self.window[self.pos] = byte;
        self.pos = (self.pos + 1) % CDC_WINDOW_SIZE;
        self.a = self.a.wrapping_sub(old).wrapping_add(u32::from(byte)) & 0xFFFF;
        self.b = self
            .b
            .wrapping_sub(CDC_WINDOW_SIZE as u32 * old)
            .wrapping_add(self.a)
            & 0xFFFF;
    }

    fn at_boundary(&self) -> bool {
        self.b & CDC_BOUNDARY_MASK == CDC_BOUNDARY_MASK
    }
}

/// Boundary scanner shared by both iterators.
#[derive(Debug, Clone)]
struct Boundaries {
    checksum: RollingChecksum,
    chunk_len: usize,
}

impl Boundaries {
    fn new() -> Self {
        Self {
            checksum: RollingChecksum::new(),
            chunk_len: 0,
        }
    }

    /// Feed `data` into the current chunk.
    ///
    /// Returns `Some(n)` when a boundary falls after `data[n - 1]` (only `n` bytes
    /// were consumed), or `None` when all of `data` was consumed without one.
    fn scan(&mut self, data: &[u8]) -> Option<usize> {
        for (i, &byte) in data.iter().enumerate() {
            self.checksum.roll(byte);
            self.chunk_len += 1;
            if self.chunk_len >= CDC_MAX_SIZE
                || (self.chunk_len >= CDC_MIN_SIZE && self.checksum.at_boundary())
            {
                self.chunk_len = 0;
                return Some(i + 1);
            }
        }
        None
    }
}

/// Chunk an in-memory buffer without copying.
pub fn slice_chunks(data: &[u8]) -> SliceChunks<'_> {
    SliceChunks {
        data,
        boundaries: Boundaries::new(),
    }
}

/// Chunk a byte stream, reading it incrementally.
///
/// The iterator owns `reader`; pass `&mut reader` to keep using the stream after
/// dropping the iterator. Read errors are yielded once and end the iteration.
pub fn data_chunks<R: Read>(reader: R) -> DataChunks<R> {
    DataChunks {
        reader,
        buf: vec![0; READ_BLOCK_SIZE].into_boxed_slice(),
        start: 0,
        end: 0,
        pending: Vec::new(),
        boundaries: Boundaries::new(),
        done: false,
    }
}

/// Iterator over the content-defined chunks of a slice. See [`slice_chunks`].
#[derive(Debug, Clone)]
pub struct SliceChunks<'a> {
    data: &'a [u8],
    boundaries: Boundaries,
}

impl<'a> Iterator for SliceChunks<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<&'a [u8]> {
        if self.data.is_empty() {
            return None;
        }
        let cut = self
            .boundaries
            .scan(self.data)
            .unwrap_or(self.data.len());
        let (chunk, rest) = self.data.split_at(cut);
        self.data = rest;
        Some(chunk)
    }
}

impl FusedIterator for SliceChunks<'_> {}

/// Iterator over the content-defined chunks of a reader. See [`data_chunks`].
#[derive(Debug)]
pub struct DataChunks<R> {
    reader: R,
    buf: Box<[u8]>,
    start: usize,
    end: usize,
    pending: Vec<u8>,
    boundaries: Boundaries,
    done: bool,
}

impl<R: Read> DataChunks<R> {
    fn fill(&mut self) -> io::Result<usize> {
        loop {
            match self.reader.read(&mut self.buf) {
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                result => return result,
            }
        }
    }
}

impl<R: Read> Iterator for DataChunks<R> {
    type Item = io::Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            if self.start == self.end {
                match self.fill() {
                    Ok(0) => {
                        self.done = true;
                        if self.pending.is_empty() {
                            return None;
                        }
                        trace!(len = self.pending.len(), "final chunk at end of stream");
                        return Some(Ok(mem::take(&mut self.pending)));
                    }
                    Ok(n) => {
                        self.start = 0;
                        self.end = n;
                    }
                    Err(e) => {
                        self.done = true;
                        return Some(Err(e));
                    }
                }
            }

            let available = &self.buf[self.start..self.end];
            match self.boundaries.scan(available) {
                Some(cut) => {
                    self.pending.extend_from_slice(&available[..cut]);
                    self.start += cut;
                    return Some(Ok(mem::take(&mut self.pending)));
                }
                None => {
                    self.pending.extend_from_slice(available);
                    self.start = self.end;
                }
            }
        }
    }
}

impl<R: Read> FusedIterator for DataChunks<R> {}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::io::Cursor;

    fn lcg_data(size: usize) -> Vec<u8> {
        let mut data = Vec::with_capacity(size);
        let mut state: u32 = 0xDEAD_BEEF;
        for _ in 0..size {
            state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            data.push((state >> 16) as u8);
        }
        data
    }

    /// Reader that hands out at most `step` bytes per call and reports
    /// `Interrupted` before every other read.
    struct Trickle {
        inner: Cursor<Vec<u8>>,
        step: usize,
        interrupt: bool,
    }

    impl Read for Trickle {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            self.interrupt = !self.interrupt;
            if self.interrupt {
                return Err(io::ErrorKind::Interrupted.into());
            }
            let n = buf.len().min(self.step);
            self.inner.read(&mut buf[..n])
        }
    }

    struct Broken;

    impl Read for Broken {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("boom"))
        }
    }

    #[test]
    fn empty_input_has_no_chunks() {
        assert_eq!(slice_chunks(b"").count(), 0);
        assert_eq!(data_chunks(Cursor::new(Vec::<u8>::new())).count(), 0);
    }

    #[test]
    fn small_input_is_single_chunk() {
        let data = b"tiny";
        let chunks: Vec<&[u8]> = slice_chunks(data).collect();
        assert_eq!(chunks, vec![data.as_slice()]);
    }

    #[test]
    fn constant_input_cuts_at_max_size() {
        let data = vec![0u8; 10_000];
        let sizes: Vec<usize> = slice_chunks(&data).map(<[u8]>::len).collect();
        assert_eq!(sizes, vec![4096, 4096, 1808]);
    }

    #[test]
    fn known_chunking_of_pseudo_random_data() {
        let data = lcg_data(64 * 1024);
        let chunks: Vec<&[u8]> = slice_chunks(&data).collect();
        assert_eq!(chunks.len(), 74);
        assert_eq!(chunks[0].len(), 277);
        assert_eq!(chunks[chunks.len() - 1].len(), 1761);
    }

    #[test]
    fn chunk_sizes_within_bounds() {
        let data = lcg_data(200_000);
        let chunks: Vec<&[u8]> = slice_chunks(&data).collect();
        assert_eq!(chunks.len(), 213);
        for (i, chunk) in chunks.iter().enumerate() {
            if i < chunks.len() - 1 {
                assert!(chunk.len() >= CDC_MIN_SIZE, "chunk {i} too small");
            }
            assert!(chunk.len() <= CDC_MAX_SIZE, "chunk {i} too large");
        }
    }

    #[test]
    fn reader_matches_slice() {
        let data = lcg_data(200_000);
        let from_slice: Vec<Vec<u8>> = slice_chunks(&data).map(<[u8]>::to_vec).collect();
        let from_reader: Vec<Vec<u8>> = data_chunks(Cursor::new(data.clone()))
            .collect::<io::Result<_>>()
            .unwrap();
        assert_eq!(from_slice, from_reader);
    }

    #[test]
    fn trickling_reader_matches_slice() {
        let data = lcg_data(20_000);
        let reader = Trickle {
            inner: Cursor::new(data.clone()),
            step: 7,
            interrupt: false,
        };
        let from_reader: Vec<Vec<u8>> = data_chunks(reader).collect::<io::Result<_>>().unwrap();
        let from_slice: Vec<Vec<u8>> = slice_chunks(&data).map(<[u8]>::to_vec).collect();
        assert_eq!(from_reader, from_slice);
    }

    #[test]
    fn read_error_is_yielded_once() {
        let mut chunks = data_chunks(Broken);
        assert!(matches!(chunks.next(), Some(Err(_))));
        assert!(chunks.next().is_none());
    }

    #[test]
    fn partial_read_leaves_reader_usable() {
        let data = lcg_data(20_000);
        let mut cursor = Cursor::new(data);
        {
            let mut chunks = data_chunks(&mut cursor);
            assert!(chunks.next().unwrap().is_ok());
        }
        // Iterator dropped after one chunk; the caller still owns the stream.
        assert!(cursor.position() > 0);
    }

    #[test]
    fn insertion_only_disturbs_nearby_chunks() {
        let v1 = lcg_data(200_000);
        let mut v2 = v1.clone();
        v2.insert(100_000, b'X');

        let c1: std::collections::HashSet<&[u8]> = slice_chunks(&v1).collect();
        let c2: std::collections::HashSet<&[u8]> = slice_chunks(&v2).collect();
        let shared = c1.intersection(&c2).count();
        assert!(
            shared + 3 >= c1.len(),
            "only {shared} of {} chunks survived a one-byte insert",
            c1.len()
        );
    }

    proptest! {
        #[test]
        fn prop_chunks_reconstruct_input(data in prop::collection::vec(any::<u8>(), 0..20_000)) {
            let joined: Vec<u8> = slice_chunks(&data).flatten().copied().collect();
            prop_assert_eq!(&joined, &data);

            let streamed: Vec<u8> = data_chunks(Cursor::new(data.clone()))
                .flat_map(|c| c.unwrap())
                .collect();
            prop_assert_eq!(&streamed, &data);
        }
    }
}
