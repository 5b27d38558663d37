//! Syscalls de IO em dispositivos
//!
//! Ponto de entrada do read/write em arquivos de dispositivo. O tamanho vem
//! do userspace como inteiro com sinal; o resultado volta no formato da
//! syscall via `result_to_isize` (contagem >= 0 ou código de erro negativo).

use super::error::{result_to_isize, SysError, SysResult};
use crate::fs::devfs::DeviceSwitch;
use crate::mm::uaccess::{UserIn, UserOut};

/// Converte o tamanho pedido pelo userspace
fn user_len(n: isize) -> SysResult<usize> {
    usize::try_from(n).map_err(|_| SysError::InvalidArgument)
}

/// Leitura de um dispositivo de caractere.
///
/// # Retorno
/// Bytes lidos (pode ser menor que `n`) ou erro
pub fn sys_devread(
    devsw: &DeviceSwitch,
    major: u32,
    dst: &mut dyn UserOut,
    n: isize,
) -> SysResult<usize> {
    let n = user_len(n)?;
    devsw.read(major, dst, n)
}

/// Escrita em um dispositivo de caractere.
///
/// # Retorno
/// Bytes escritos ou erro
pub fn sys_devwrite(
    devsw: &DeviceSwitch,
    major: u32,
    src: &dyn UserIn,
    n: isize,
) -> SysResult<usize> {
    let n = user_len(n)?;
    devsw.write(major, src, n)
}

/// `sys_devread` no formato de retorno da syscall
pub fn devread(devsw: &DeviceSwitch, major: u32, dst: &mut dyn UserOut, n: isize) -> isize {
    result_to_isize(sys_devread(devsw, major, dst, n))
}

/// `sys_devwrite` no formato de retorno da syscall
pub fn devwrite(devsw: &DeviceSwitch, major: u32, src: &dyn UserIn, n: isize) -> isize {
    result_to_isize(sys_devwrite(devsw, major, src, n))
}
