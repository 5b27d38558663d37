//! Testes de Integração: syscall -> DeviceSwitch -> /dev/random
//!
//! Usa ponteiros de usuário reais (`UserPtr` sobre `UserMemory`), como o
//! caminho de uma syscall read/write de um processo.

use super::{create_test_devfs, create_user_memory, USER_BASE};
use crate::config::RANDOM_MAJOR;
use crate::klib::lfsr::{self, Lfsr8};
use crate::mm::uaccess::{AddressSpace, UserPtr};
use crate::syscall::error::SysError;
use crate::syscall::io::{devread, devwrite, sys_devread, sys_devwrite};

#[test]
fn integration_read_into_user_buffer() {
    let devfs = create_test_devfs();
    let mem = create_user_memory(64);

    let mut dst = UserPtr::new(&mem, USER_BASE, 64);
    assert_eq!(devread(devfs.devsw(), RANDOM_MAJOR, &mut dst, 64), 8);

    let mut copied = [0u8; 9];
    mem.read_bytes(USER_BASE, &mut copied).unwrap();
    let expected: Vec<u8> = Lfsr8::new(0x2A).take(8).collect();
    assert_eq!(copied[..8], expected[..]);
    // Nada além do limite de 8 bytes foi tocado
    assert_eq!(copied[8], 0);
}

#[test]
fn integration_write_wrong_length_is_negative() {
    let devfs = create_test_devfs();
    let mem = create_user_memory(4);
    let src = UserPtr::new(&mem, USER_BASE, 4);

    let einval = SysError::InvalidArgument.as_isize();
    assert_eq!(devwrite(devfs.devsw(), RANDOM_MAJOR, &src, 0), einval);
    assert_eq!(devwrite(devfs.devsw(), RANDOM_MAJOR, &src, 2), einval);
    assert_eq!(devwrite(devfs.devsw(), RANDOM_MAJOR, &src, -1), einval);
    assert_eq!(devfs.random().seed(), 0x2A);
}

#[test]
fn integration_negative_read_length() {
    let devfs = create_test_devfs();
    let mem = create_user_memory(4);
    let mut dst = UserPtr::new(&mem, USER_BASE, 4);

    assert_eq!(
        sys_devread(devfs.devsw(), RANDOM_MAJOR, &mut dst, -8),
        Err(SysError::InvalidArgument)
    );
    assert_eq!(devfs.random().seed(), 0x2A);
}

#[test]
fn integration_reseed_through_syscall() {
    let devfs = create_test_devfs();
    let mem = create_user_memory(8);
    mem.write_bytes(USER_BASE, &[0x99]).unwrap();

    let src = UserPtr::new(&mem, USER_BASE, 1);
    assert_eq!(sys_devwrite(devfs.devsw(), RANDOM_MAJOR, &src, 1), Ok(1));

    let mut dst = UserPtr::new(&mem, USER_BASE + 4, 1);
    assert_eq!(devread(devfs.devsw(), RANDOM_MAJOR, &mut dst, 1), 1);

    let mut out = [0u8; 1];
    mem.read_bytes(USER_BASE + 4, &mut out).unwrap();
    assert_eq!(out[0], lfsr::next(0x99));
}

#[test]
fn integration_write_bad_address() {
    let devfs = create_test_devfs();
    let mem = create_user_memory(4);
    let src = UserPtr::new(&mem, 0x7000_0000, 1);

    assert_eq!(
        devwrite(devfs.devsw(), RANDOM_MAJOR, &src, 1),
        SysError::BadAddress.as_isize()
    );
    assert_eq!(devfs.random().seed(), 0x2A);
}

#[test]
fn integration_unknown_major() {
    let devfs = create_test_devfs();
    let mem = create_user_memory(4);
    let mut dst = UserPtr::new(&mem, USER_BASE, 4);

    assert_eq!(
        devread(devfs.devsw(), 7, &mut dst, 4),
        SysError::NotFound.as_isize()
    );
}
