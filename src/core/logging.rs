// =============================================================================
// KERNEL LOGGING SYSTEM - ZERO OVERHEAD
// =============================================================================
//
// Sistema de logging do driver com custo ZERO em release.
//
// ARQUITETURA:
// - Usa features do Cargo para compile-time filtering
// - Com feature "no_logs", TODOS os macros viram expressões vazias
// - SEM core::fmt - Apenas strings literais + valores em hex
// - SEM alocação
// - A saída vai para um `LogSink` instalado pelo kernel (normalmente a
//   serial COM1). Sem sink instalado, a saída é descartada.
//
// NÍVEIS DE LOG (do mais crítico ao menos):
// - ERROR: Erros fatais ou críticos
// - WARN:  Situações suspeitas mas recuperáveis
// - INFO:  Fluxo normal de execução
// - DEBUG: Informações de debugging
// - TRACE: Detalhes extremos (cada operação)
//
// COMO USAR:
//   kinfo!("(Random) Inicializando...");        // Apenas string
//   kdebug!("(Random) Bytes=", written);        // String + hex
//
// =============================================================================

use spin::Once;

// =============================================================================
// PREFIXOS COM CORES ANSI
// =============================================================================

pub const P_ERROR: &str = "\x1b[1;31m[ERRO]\x1b[0m ";
pub const P_WARN: &str = "\x1b[1;33m[WARN]\x1b[0m ";
pub const P_INFO: &str = "\x1b[32m[INFO]\x1b[0m ";
pub const P_DEBUG: &str = "\x1b[36m[DEBG]\x1b[0m ";
pub const P_TRACE: &str = "\x1b[35m[TRAC]\x1b[0m ";
pub const P_OK: &str = "\x1b[32m[OK]\x1b[0m ";
pub const P_FAIL: &str = "\x1b[1;31m[FAIL]\x1b[0m ";

// =============================================================================
// SINK
// =============================================================================

/// Destino da saída de log.
///
/// O kernel instala um sink que escreve na UART; os testes instalam um sink
/// que captura a saída em memória.
pub trait LogSink: Sync {
    /// Escreve uma string crua (já com prefixos)
    fn write_str(&self, s: &str);
}

static SINK: Once<&'static dyn LogSink> = Once::new();

/// Instala o sink global de log.
///
/// Só pode ser feito uma vez. Retorna `false` se já havia um sink
/// instalado (o novo é ignorado).
pub fn set_sink(sink: &'static dyn LogSink) -> bool {
    let mut installed = false;
    SINK.call_once(|| {
        installed = true;
        sink
    });
    installed
}

/// Envia uma string para o sink.
#[inline(never)]
pub fn emit_str(s: &str) {
    if let Some(sink) = SINK.get() {
        sink.write_str(s);
    }
}

/// Envia uma nova linha (CRLF).
#[inline(never)]
pub fn emit_nl() {
    emit_str("\r\n");
}

/// Envia um valor u64 em formato hexadecimal.
///
/// Formato de saída: 0x0123456789ABCDEF (sempre 18 caracteres)
#[inline(never)]
pub fn emit_hex(value: u64) {
    const DIGITS: &[u8; 16] = b"0123456789ABCDEF";

    let mut buf = [0u8; 18];
    buf[0] = b'0';
    buf[1] = b'x';
    for i in 0..16 {
        let nibble = (value >> ((15 - i) * 4)) & 0xF;
        buf[2 + i] = DIGITS[nibble as usize];
    }

    if let Ok(s) = core::str::from_utf8(&buf) {
        emit_str(s);
    }
}

// =============================================================================
// MACROS DE LOG - NÍVEL ERROR
// =============================================================================
//
// kerror! - Sempre ativo (exceto com no_logs)
//

#[cfg(not(feature = "no_logs"))]
#[macro_export]
macro_rules! kerror {
    // Apenas string literal
    ($msg:expr) => {{
        $crate::core::logging::emit_str($crate::core::logging::P_ERROR);
        $crate::core::logging::emit_str($msg);
        $crate::core::logging::emit_nl();
    }};
    // String + valor hex
    ($msg:expr, $val:expr) => {{
        $crate::core::logging::emit_str($crate::core::logging::P_ERROR);
        $crate::core::logging::emit_str($msg);
        $crate::core::logging::emit_hex($val as u64);
        $crate::core::logging::emit_nl();
    }};
}

#[cfg(feature = "no_logs")]
#[macro_export]
macro_rules! kerror {
    ($($t:tt)*) => {{}};
}

// =============================================================================
// MACROS DE LOG - NÍVEL WARN
// =============================================================================

#[cfg(not(feature = "no_logs"))]
#[macro_export]
macro_rules! kwarn {
    ($msg:expr) => {{
        $crate::core::logging::emit_str($crate::core::logging::P_WARN);
        $crate::core::logging::emit_str($msg);
        $crate::core::logging::emit_nl();
    }};
    ($msg:expr, $val:expr) => {{
        $crate::core::logging::emit_str($crate::core::logging::P_WARN);
        $crate::core::logging::emit_str($msg);
        $crate::core::logging::emit_hex($val as u64);
        $crate::core::logging::emit_nl();
    }};
}

#[cfg(feature = "no_logs")]
#[macro_export]
macro_rules! kwarn {
    ($($t:tt)*) => {{}};
}

// =============================================================================
// MACROS DE LOG - NÍVEL INFO
// =============================================================================
//
// kinfo! - Ativo com log_info, log_debug ou log_trace
//

#[cfg(all(
    not(feature = "no_logs"),
    any(feature = "log_info", feature = "log_debug", feature = "log_trace")
))]
#[macro_export]
macro_rules! kinfo {
    ($msg:expr) => {{
        $crate::core::logging::emit_str($crate::core::logging::P_INFO);
        $crate::core::logging::emit_str($msg);
        $crate::core::logging::emit_nl();
    }};
    ($msg:expr, $val:expr) => {{
        $crate::core::logging::emit_str($crate::core::logging::P_INFO);
        $crate::core::logging::emit_str($msg);
        $crate::core::logging::emit_hex($val as u64);
        $crate::core::logging::emit_nl();
    }};
}

#[cfg(not(all(
    not(feature = "no_logs"),
    any(feature = "log_info", feature = "log_debug", feature = "log_trace")
)))]
#[macro_export]
macro_rules! kinfo {
    ($($t:tt)*) => {{}};
}

// =============================================================================
// MACROS DE LOG - NÍVEL DEBUG
// =============================================================================
//
// kdebug! - Ativo apenas com log_debug ou log_trace
//

#[cfg(all(
    not(feature = "no_logs"),
    any(feature = "log_debug", feature = "log_trace")
))]
#[macro_export]
macro_rules! kdebug {
    ($msg:expr) => {{
        $crate::core::logging::emit_str($crate::core::logging::P_DEBUG);
        $crate::core::logging::emit_str($msg);
        $crate::core::logging::emit_nl();
    }};
    ($msg:expr, $val:expr) => {{
        $crate::core::logging::emit_str($crate::core::logging::P_DEBUG);
        $crate::core::logging::emit_str($msg);
        $crate::core::logging::emit_hex($val as u64);
        $crate::core::logging::emit_nl();
    }};
}

#[cfg(not(all(
    not(feature = "no_logs"),
    any(feature = "log_debug", feature = "log_trace")
)))]
#[macro_export]
macro_rules! kdebug {
    ($($t:tt)*) => {{}};
}

// =============================================================================
// MACROS DE LOG - NÍVEL TRACE
// =============================================================================
//
// ktrace! - Ativo apenas com log_trace
//

#[cfg(all(not(feature = "no_logs"), feature = "log_trace"))]
#[macro_export]
macro_rules! ktrace {
    ($msg:expr) => {{
        $crate::core::logging::emit_str($crate::core::logging::P_TRACE);
        $crate::core::logging::emit_str($msg);
        $crate::core::logging::emit_nl();
    }};
    ($msg:expr, $val:expr) => {{
        $crate::core::logging::emit_str($crate::core::logging::P_TRACE);
        $crate::core::logging::emit_str($msg);
        $crate::core::logging::emit_hex($val as u64);
        $crate::core::logging::emit_nl();
    }};
}

#[cfg(not(all(not(feature = "no_logs"), feature = "log_trace")))]
#[macro_export]
macro_rules! ktrace {
    ($($t:tt)*) => {{}};
}

// =============================================================================
// MACROS DE STATUS (OK/FAIL)
// =============================================================================

/// kok! - Log de sucesso (prefixo verde [OK]).
#[cfg(not(feature = "no_logs"))]
#[macro_export]
macro_rules! kok {
    ($msg:expr) => {{
        $crate::core::logging::emit_str($crate::core::logging::P_OK);
        $crate::core::logging::emit_str($msg);
        $crate::core::logging::emit_nl();
    }};
}

#[cfg(feature = "no_logs")]
#[macro_export]
macro_rules! kok {
    ($($t:tt)*) => {{}};
}

/// kfail! - Log de falha (prefixo vermelho [FAIL]).
#[cfg(not(feature = "no_logs"))]
#[macro_export]
macro_rules! kfail {
    ($msg:expr) => {{
        $crate::core::logging::emit_str($crate::core::logging::P_FAIL);
        $crate::core::logging::emit_str($msg);
        $crate::core::logging::emit_nl();
    }};
}

#[cfg(feature = "no_logs")]
#[macro_export]
macro_rules! kfail {
    ($($t:tt)*) => {{}};
}
