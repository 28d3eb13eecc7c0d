//! Hash helpers – abstracción para poder cambiar de algoritmo sin tocar el resto del core.

use blake3::Hasher;

/// Hashea bytes y devuelve hex.
pub fn hash_bytes(input: &[u8]) -> String {
    blake3::hash(input).to_hex().to_string()
}

/// Rellena `out` con bytes pseudoaleatorios deterministas derivados de `seed`.
pub fn fill_from_seed(seed: &[u8], out: &mut [u8]) {
    let mut h = Hasher::new();
    h.update(seed);
    h.finalize_xof().fill(out);
}

/// Primer byte del hash de `seed`.
pub fn seed_byte(seed: &[u8]) -> u8 {
    blake3::hash(seed).as_bytes()[0]
}
