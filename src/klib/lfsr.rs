//! LFSR - Linear Feedback Shift Register de 8 bits
//!
//! Gerador pseudo-aleatório mínimo usado pelo `/dev/random`.
//!
//! # Taps
//!
//! O bit de feedback é o XOR dos bits 0, 2, 3 e 4 do estado atual. O estado
//! é deslocado um bit para a direita e o feedback entra no bit 7:
//!
//! ```text
//!   b7 b6 b5 b4 b3 b2 b1 b0
//!    ^           |  |  |  |
//!    +--- XOR ---+--+-----+   (b0 ^ b2 ^ b3 ^ b4)
//! ```
//!
//! Esses taps dão período máximo: todo estado não-zero volta a si mesmo
//! após exatamente 255 passos.
//!
//! # Estado Zero
//!
//! `0x00` é ponto fixo (feedback 0, desloca 0). Uma seed zero trava o
//! gerador em zeros até a próxima escrita de seed.
//!
//! # Segurança
//! ⚠️ NÃO é criptograficamente seguro. Um único byte observado revela
//! todo o resto da sequência.

/// Calcula o próximo estado do LFSR.
///
/// O valor retornado é ao mesmo tempo o byte emitido e a próxima seed.
#[inline]
pub const fn next(state: u8) -> u8 {
    let bit = (state ^ (state >> 2) ^ (state >> 3) ^ (state >> 4)) & 0x01;
    (state >> 1) | (bit << 7)
}

/// Iterador sobre a sequência do LFSR a partir de uma seed.
///
/// Cada item é `next` do item anterior; o primeiro é `next(seed)`.
/// A sequência é infinita.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lfsr8 {
    state: u8,
}

impl Lfsr8 {
    /// Cria um gerador com a seed dada
    pub const fn new(seed: u8) -> Self {
        Self { state: seed }
    }

    /// Estado atual (último byte emitido, ou a seed se nada foi emitido)
    pub const fn state(&self) -> u8 {
        self.state
    }

    /// Avança `steps` vezes e retorna o novo estado
    pub fn advance(&mut self, steps: usize) -> u8 {
        for _ in 0..steps {
            self.state = next(self.state);
        }
        self.state
    }
}

impl Iterator for Lfsr8 {
    type Item = u8;

    #[inline]
    fn next(&mut self) -> Option<u8> {
        self.state = next(self.state);
        Some(self.state)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
