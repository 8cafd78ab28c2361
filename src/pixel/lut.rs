//! Channel expansion tables for the packed 16-bit formats.
//!
//! Entry `v` holds `round(v / max * 255)` where `max = len - 1`.

pub(crate) const EXPAND4: [u8; 16] = expand_table::<16>();
pub(crate) const EXPAND5: [u8; 32] = expand_table::<32>();
pub(crate) const EXPAND6: [u8; 64] = expand_table::<64>();

const fn expand_table<const N: usize>() -> [u8; N] {
    let max = (N - 1) as u32;
    let mut table = [0u8; N];
    let mut i = 0;
    while i < N {
        // floor(x + 0.5) with x = i * 255 / max, kept in integers
        table[i] = ((2 * i as u32 * 255 + max) / (2 * max)) as u8;
        i += 1;
    }
    table
}

#[cfg(test)]
#[path = "../../tests/unit/pixel/lut.rs"]
mod tests;
