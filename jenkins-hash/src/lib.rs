//! Bob Jenkins' lookup3 block hash (`hashlittle`), reproduced bit-for-bit.
//!
//! The hash consumes its input in 12-byte blocks, adding each block word-wise
//! into three 32-bit accumulators and stirring them with a fixed
//! rotate/xor/add sequence. The trailing 0-12 bytes are folded in as
//! zero-extended little-endian words before a final avalanche.
//!
//! The reference C code reads the trailing block with masked whole-word loads
//! and so relies on readable memory past the end of the key. Here the tail is
//! copied into a zero-filled block instead, which yields the same digest
//! without touching anything outside the slice. Words are always decoded as
//! little-endian, so every platform produces the same output.
//!
//! This is not a cryptographic hash. It exists so that candidate strings can be
//! matched against digests produced by software that uses lookup3 for its
//! string identifiers.

/// Value every accumulator starts from, before length and seed are added.
pub const INITIAL_STATE: u32 = 0xDEAD_BEEF;

/// Seed used when no other seed is specified.
pub const DEFAULT_SEED: u32 = 0;

/// Number of bytes consumed per mixing round.
pub const BLOCK_SIZE: usize = 12;

#[inline(always)]
fn mix(a: &mut u32, b: &mut u32, c: &mut u32) {
    *a = a.wrapping_sub(*c);
    *a ^= c.rotate_left(4);
    *c = c.wrapping_add(*b);

    *b = b.wrapping_sub(*a);
    *b ^= a.rotate_left(6);
    *a = a.wrapping_add(*c);

    *c = c.wrapping_sub(*b);
    *c ^= b.rotate_left(8);
    *b = b.wrapping_add(*a);

    *a = a.wrapping_sub(*c);
    *a ^= c.rotate_left(16);
    *c = c.wrapping_add(*b);

    *b = b.wrapping_sub(*a);
    *b ^= a.rotate_left(19);
    *a = a.wrapping_add(*c);

    *c = c.wrapping_sub(*b);
    *c ^= b.rotate_left(4);
    *b = b.wrapping_add(*a);
}

#[inline(always)]
fn final_mix(a: &mut u32, b: &mut u32, c: &mut u32) {
    *c ^= *b;
    *c = c.wrapping_sub(b.rotate_left(14));
    *a ^= *c;
    *a = a.wrapping_sub(c.rotate_left(11));
    *b ^= *a;
    *b = b.wrapping_sub(a.rotate_left(25));
    *c ^= *b;
    *c = c.wrapping_sub(b.rotate_left(16));
    *a ^= *c;
    *a = a.wrapping_sub(c.rotate_left(4));
    *b ^= *a;
    *b = b.wrapping_sub(a.rotate_left(14));
    *c ^= *b;
    *c = c.wrapping_sub(b.rotate_left(24));
}

/// Reads the three little-endian words of a full block.
#[inline(always)]
fn block_words(block: &[u8; BLOCK_SIZE]) -> (u32, u32, u32) {
    (
        u32::from_le_bytes([block[0], block[1], block[2], block[3]]),
        u32::from_le_bytes([block[4], block[5], block[6], block[7]]),
        u32::from_le_bytes([block[8], block[9], block[10], block[11]]),
    )
}

/// Hashes `key` with the given `seed`.
///
/// The key length takes part in the initial state, so it is mixed in modulo
/// 2^32 exactly like the reference implementation's `(uint32_t)length`.
/// An empty key short-circuits and returns the untouched initial state,
/// `0xDEADBEEF + seed`.
///
/// ```
/// use jenkins_hash::jenkins_hash;
///
/// assert_eq!(jenkins_hash(b"", 0), 0xDEAD_BEEF);
/// assert_eq!(jenkins_hash(b"Four score and seven years ago", 0), 0x1777_0551);
/// ```
pub fn jenkins_hash(key: &[u8], seed: u32) -> u32 {
    let init = INITIAL_STATE.wrapping_add(key.len() as u32).wrapping_add(seed);
    let (mut a, mut b, mut c) = (init, init, init);

    let mut rest = key;
    // A key whose length is an exact multiple of 12 leaves its last full
    // block for the tail step, so only strictly longer remainders are mixed.
    while let Some((block, tail)) = rest.split_first_chunk::<BLOCK_SIZE>() {
        if tail.is_empty() {
            break;
        }
        let (k0, k1, k2) = block_words(block);
        a = a.wrapping_add(k0);
        b = b.wrapping_add(k1);
        c = c.wrapping_add(k2);
        mix(&mut a, &mut b, &mut c);
        rest = tail;
    }

    if rest.is_empty() {
        return c;
    }

    let mut last = [0u8; BLOCK_SIZE];
    last[..rest.len()].copy_from_slice(rest);
    let (k0, k1, k2) = block_words(&last);
    a = a.wrapping_add(k0);
    b = b.wrapping_add(k1);
    c = c.wrapping_add(k2);
    final_mix(&mut a, &mut b, &mut c);

    c
}
