//! Testes do contrato read/write do /dev/random

use super::{create_user_memory, USER_BASE};
use crate::config::{RANDOM_DEFAULT_SEED, RANDOM_MAX_READ};
use crate::fs::devfs::devices::RandomDevice;
use crate::fs::devfs::CharDevice;
use crate::klib::lfsr::{self, Lfsr8};
use crate::mm::uaccess::{AddressSpace, KernelBuf, KernelSlice, UserPtr};
use crate::mm::user::UserMemory;
use crate::syscall::error::SysError;

/// Primeiros 8 bytes a partir de 0x2A
const GOLDEN_FIRST_READ: [u8; 8] = [0x95, 0xCA, 0xE5, 0x72, 0xB9, 0xDC, 0xEE, 0x77];

/// Estado após `steps` avanços a partir da seed padrão
fn state_after(steps: usize) -> u8 {
    Lfsr8::new(RANDOM_DEFAULT_SEED).advance(steps)
}

#[test]
fn test_initial_seed() {
    assert_eq!(RandomDevice::new().seed(), 0x2A);
}

#[test]
fn test_first_read_matches_golden() {
    let dev = RandomDevice::new();
    let mut raw = [0u8; 8];
    assert_eq!(dev.read(&mut KernelBuf(&mut raw), 8), Ok(8));
    assert_eq!(raw, GOLDEN_FIRST_READ);
    assert_eq!(dev.seed(), 0x77);
}

#[test]
fn test_read_clamps_to_max() {
    let dev = RandomDevice::new();
    let mut raw = [0u8; 32];
    assert_eq!(dev.read(&mut KernelBuf(&mut raw), 32), Ok(RANDOM_MAX_READ));
    assert_eq!(raw[..8], GOLDEN_FIRST_READ);
    assert!(raw[8..].iter().all(|&b| b == 0));
    // Avançou exatamente 8 vezes
    assert_eq!(dev.seed(), state_after(RANDOM_MAX_READ));
}

#[test]
fn test_read_zero_bytes() {
    let dev = RandomDevice::new();
    let mut raw = [0u8; 4];
    assert_eq!(dev.read(&mut KernelBuf(&mut raw), 0), Ok(0));
    assert_eq!(dev.seed(), RANDOM_DEFAULT_SEED);
}

#[test]
fn test_reads_continue_sequence() {
    let dev = RandomDevice::new();
    let mut first = [0u8; 3];
    let mut second = [0u8; 5];
    assert_eq!(dev.read(&mut KernelBuf(&mut first), 3), Ok(3));
    assert_eq!(dev.read(&mut KernelBuf(&mut second), 5), Ok(5));
    assert_eq!(first, GOLDEN_FIRST_READ[..3]);
    assert_eq!(second, GOLDEN_FIRST_READ[3..]);
}

#[test]
fn test_read_short_when_third_byte_faults() {
    // Só 2 bytes mapeados, mas o chamador declara 8
    let mem = create_user_memory(2);
    let dev = RandomDevice::new();

    let mut dst = UserPtr::new(&mem, USER_BASE, 8);
    assert_eq!(dev.read(&mut dst, 8), Ok(2));

    // A seed avança antes da cópia: o terceiro byte foi consumido
    assert_eq!(dev.seed(), state_after(3));
    assert!(!dev.seed_lock().is_locked());

    let mut copied = [0u8; 2];
    mem.read_bytes(USER_BASE, &mut copied).unwrap();
    assert_eq!(copied, GOLDEN_FIRST_READ[..2]);
}

#[test]
fn test_read_fault_on_first_byte() {
    let mem = UserMemory::new();
    let dev = RandomDevice::new();

    let mut dst = UserPtr::new(&mem, USER_BASE, 8);
    assert_eq!(dev.read(&mut dst, 8), Ok(0));
    assert_eq!(dev.seed(), state_after(1));
    assert!(!dev.seed_lock().is_locked());
}

#[test]
fn test_read_bounded_by_kernel_buffer() {
    let dev = RandomDevice::new();
    let mut raw = [0u8; 3];
    assert_eq!(dev.read(&mut KernelBuf(&mut raw), 8), Ok(3));
    assert_eq!(raw, GOLDEN_FIRST_READ[..3]);
    assert_eq!(dev.seed(), state_after(4));
}

#[test]
fn test_write_rejects_wrong_length() {
    let dev = RandomDevice::new();
    assert_eq!(
        dev.write(&KernelSlice(&[]), 0),
        Err(SysError::InvalidArgument)
    );
    assert_eq!(
        dev.write(&KernelSlice(&[0x11, 0x22]), 2),
        Err(SysError::InvalidArgument)
    );
    assert_eq!(dev.seed(), RANDOM_DEFAULT_SEED);
    assert!(!dev.seed_lock().is_locked());
}

#[test]
fn test_write_reseeds_then_read_advances() {
    let dev = RandomDevice::new();
    assert_eq!(dev.write(&KernelSlice(&[0x5A]), 1), Ok(1));
    assert_eq!(dev.seed(), 0x5A);

    let mut raw = [0u8; 1];
    assert_eq!(dev.read(&mut KernelBuf(&mut raw), 1), Ok(1));
    // Primeiro byte é next(seed), não a própria seed
    assert_eq!(raw[0], lfsr::next(0x5A));
    assert_ne!(raw[0], 0x5A);
}

#[test]
fn test_write_replaces_whole_seed() {
    let dev = RandomDevice::new();
    let mut raw = [0u8; 5];
    dev.read(&mut KernelBuf(&mut raw), 5).unwrap();

    dev.write(&KernelSlice(&[0x2A]), 1).unwrap();
    let mut again = [0u8; 5];
    dev.read(&mut KernelBuf(&mut again), 5).unwrap();
    // Mesma seed -> mesma sequência, nada do estado anterior é misturado
    assert_eq!(raw, again);
}

#[test]
fn test_write_from_user_memory() {
    let mem = create_user_memory(4);
    mem.write_bytes(USER_BASE + 1, &[0xC3]).unwrap();
    let dev = RandomDevice::new();

    let src = UserPtr::new(&mem, USER_BASE + 1, 1);
    assert_eq!(dev.write(&src, 1), Ok(1));
    assert_eq!(dev.seed(), 0xC3);
}

#[test]
fn test_write_bad_address_keeps_seed() {
    let mem = UserMemory::new();
    let dev = RandomDevice::new();

    let src = UserPtr::new(&mem, USER_BASE, 1);
    assert_eq!(dev.write(&src, 1), Err(SysError::BadAddress));
    assert_eq!(dev.seed(), RANDOM_DEFAULT_SEED);
    assert!(!dev.seed_lock().is_locked());
}

#[test]
fn test_zero_seed_is_stuck() {
    let dev = RandomDevice::with_seed(0x11);
    dev.write(&KernelSlice(&[0x00]), 1).unwrap();

    let mut raw = [0xFFu8; 8];
    assert_eq!(dev.read(&mut KernelBuf(&mut raw), 8), Ok(8));
    assert_eq!(raw, [0u8; 8]);
    assert_eq!(dev.seed(), 0);
}
