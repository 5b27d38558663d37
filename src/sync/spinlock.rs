//! Spinlock - bloqueio com busy-wait

use core::fmt;
use core::ops::{Deref, DerefMut};

/// Spinlock nomeado - usa busy-wait, NÃO pode dormir
///
/// # Quando usar
///
/// - Seções críticas MUITO curtas
/// - Quando não pode chamar scheduler
///
/// # Quando NÃO usar
///
/// - Seções que podem demorar
/// - Para proteger I/O lento
///
/// O nome só serve para diagnóstico (logs, `Debug`).
pub struct Spinlock<T> {
    name: &'static str,
    inner: spin::Mutex<T>,
}

impl<T> Spinlock<T> {
    /// Cria (inicializa) um novo spinlock
    pub const fn new(name: &'static str, data: T) -> Self {
        Self {
            name,
            inner: spin::Mutex::new(data),
        }
    }

    /// Adquire o lock
    ///
    /// A liberação acontece no `Drop` do guard.
    pub fn lock(&self) -> SpinlockGuard<'_, T> {
        SpinlockGuard {
            guard: self.inner.lock(),
        }
    }

    /// Tenta adquirir sem bloquear
    pub fn try_lock(&self) -> Option<SpinlockGuard<'_, T>> {
        self.inner.try_lock().map(|guard| SpinlockGuard { guard })
    }

    /// Verifica se o lock está retido (por qualquer CPU)
    pub fn is_locked(&self) -> bool {
        self.inner.is_locked()
    }

    /// Nome do lock
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl<T> fmt::Debug for Spinlock<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Spinlock")
            .field("name", &self.name())
            .field("locked", &self.is_locked())
            .finish()
    }
}

/// Guard do spinlock - libera ao sair do escopo
pub struct SpinlockGuard<'a, T> {
    guard: spin::MutexGuard<'a, T>,
}

impl<T> Deref for SpinlockGuard<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.guard
    }
}

impl<T> DerefMut for SpinlockGuard<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.guard
    }
}
