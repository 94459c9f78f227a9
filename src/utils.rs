use crate::AnfError;
use num_bigint::BigUint;
use num_traits::Zero;

/// Variable count $n$ of a table of length $2^n$.
#[inline]
pub(crate) fn variables_count_from_len(len: usize) -> Result<usize, AnfError> {
    if !len.is_power_of_two() {
        // also rejects 0
        return Err(AnfError::InvalidLength(len));
    }
    Ok(len.trailing_zeros() as usize)
}

/// First `len` bits of `value`, lowest bit first. `len` must be <= 64.
pub(crate) fn bits_from_u64(value: u64, len: usize) -> Vec<bool> {
    (0..len).map(|i| (value >> i) & 1 == 1).collect()
}

/// Packs bits into an u64, `bits[i]` being bit $i$. `None` if there are more than 64 bits.
pub(crate) fn bits_to_u64(bits: &[bool]) -> Option<u64> {
    if bits.len() > 64 {
        return None;
    }
    Some(
        bits.iter()
            .enumerate()
            .filter(|(_, bit)| **bit)
            .fold(0u64, |packed, (i, _)| packed | (1 << i)),
    )
}

pub(crate) fn bits_from_biguint(value: &BigUint, len: usize) -> Vec<bool> {
    (0..len as u64).map(|i| value.bit(i)).collect()
}

pub(crate) fn bits_to_biguint(bits: &[bool]) -> BigUint {
    let mut packed = BigUint::zero();
    for (i, _) in bits.iter().enumerate().filter(|(_, bit)| **bit) {
        packed.set_bit(i as u64, true);
    }
    packed
}
