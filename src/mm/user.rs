//! Espaço de endereçamento de usuário
//!
//! Modelo simples de page table: uma lista de regiões mapeadas, cada uma
//! com seus bytes e flags de acesso. Implementa `AddressSpace`, então um
//! `UserPtr` sobre ela se comporta como um ponteiro de processo real:
//! bytes não mapeados ou sem permissão resultam em `BadAddress`.

use alloc::vec;
use alloc::vec::Vec;

use bitflags::bitflags;
use spin::Mutex;

use crate::config::USER_SPACE_END;
use crate::mm::uaccess::AddressSpace;
use crate::syscall::error::{SysError, SysResult};

bitflags! {
    /// Flags de acesso de uma região
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct PageFlags: u8 {
        const READ  = 1 << 0;
        const WRITE = 1 << 1;
        const USER  = 1 << 2;
    }
}

impl PageFlags {
    /// Região de dados de usuário (leitura e escrita)
    pub const USER_RW: Self = Self::READ.union(Self::WRITE).union(Self::USER);

    /// Região de usuário somente leitura
    pub const USER_RO: Self = Self::READ.union(Self::USER);
}

// Região mapeada
struct Region {
    base: usize,
    data: Vec<u8>,
    flags: PageFlags,
}

impl Region {
    fn end(&self) -> usize {
        self.base + self.data.len()
    }

    fn contains(&self, addr: usize, len: usize) -> bool {
        match addr.checked_add(len) {
            Some(end) => addr >= self.base && end <= self.end(),
            None => false,
        }
    }

    fn overlaps(&self, base: usize, end: usize) -> bool {
        base < self.end() && self.base < end
    }
}

/// Espaço de endereçamento de usuário
pub struct UserMemory {
    regions: Mutex<Vec<Region>>,
}

impl UserMemory {
    /// Cria um espaço vazio (nada mapeado)
    pub const fn new() -> Self {
        Self {
            regions: Mutex::new(Vec::new()),
        }
    }

    /// Mapeia `[base, base + len)` zerado com as flags dadas
    pub fn map(&self, base: usize, len: usize, flags: PageFlags) -> SysResult<()> {
        if len == 0 {
            return Err(SysError::InvalidArgument);
        }
        if base == 0 {
            return Err(SysError::BadAddress);
        }
        let end = base.checked_add(len).ok_or(SysError::BadAddress)?;
        if end > USER_SPACE_END {
            return Err(SysError::BadAddress);
        }

        let mut regions = self.regions.lock();
        if regions.iter().any(|r| r.overlaps(base, end)) {
            return Err(SysError::AddressInUse);
        }

        regions.push(Region {
            base,
            data: vec![0; len],
            flags,
        });
        Ok(())
    }

    /// Remove o mapeamento que começa em `base`
    pub fn unmap(&self, base: usize) -> SysResult<()> {
        let mut regions = self.regions.lock();
        let idx = regions
            .iter()
            .position(|r| r.base == base)
            .ok_or(SysError::NotFound)?;
        regions.swap_remove(idx);
        Ok(())
    }

    /// Troca as flags do mapeamento que começa em `base`
    pub fn protect(&self, base: usize, flags: PageFlags) -> SysResult<()> {
        let mut regions = self.regions.lock();
        let region = regions
            .iter_mut()
            .find(|r| r.base == base)
            .ok_or(SysError::NotFound)?;
        region.flags = flags;
        Ok(())
    }
}

impl Default for UserMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl AddressSpace for UserMemory {
    fn write_bytes(&self, addr: usize, bytes: &[u8]) -> SysResult<()> {
        let mut regions = self.regions.lock();
        let region = regions
            .iter_mut()
            .find(|r| r.contains(addr, bytes.len()))
            .ok_or(SysError::BadAddress)?;
        if !region.flags.contains(PageFlags::USER | PageFlags::WRITE) {
            return Err(SysError::BadAddress);
        }

        let start = addr - region.base;
        region.data[start..start + bytes.len()].copy_from_slice(bytes);
        Ok(())
    }

    fn read_bytes(&self, addr: usize, out: &mut [u8]) -> SysResult<()> {
        let regions = self.regions.lock();
        let region = regions
            .iter()
            .find(|r| r.contains(addr, out.len()))
            .ok_or(SysError::BadAddress)?;
        if !region.flags.contains(PageFlags::USER | PageFlags::READ) {
            return Err(SysError::BadAddress);
        }

        let start = addr - region.base;
        out.copy_from_slice(&region.data[start..start + out.len()]);
        Ok(())
    }
}
