//! 디지털 저장 용량(기준: byte)과 전송 속도(기준: bit/s) 단위.
//!
//! 십진(SI) 접두사는 1000 거듭제곱, 이진(IEC) 접두사는 1024 거듭제곱이다.
//! 두 계열을 섞어 쓰지 않는다.

use super::{Alias, LinearUnit, UnitGroup};

const K: f64 = 1000.0;
const KI: f64 = 1024.0;

pub static STORAGE_GROUPS: &[UnitGroup] = &[
    UnitGroup {
        name: "Decimal (SI)",
        units: &[
            LinearUnit::base("b", "Byte", "B"),
            LinearUnit::scaled("kb", "Kilobyte", "KB", K),
            LinearUnit::scaled("mb", "Megabyte", "MB", K * K),
            LinearUnit::scaled("gb", "Gigabyte", "GB", K * K * K),
            LinearUnit::scaled("tb", "Terabyte", "TB", K * K * K * K),
            LinearUnit::scaled("pb", "Petabyte", "PB", K * K * K * K * K),
            LinearUnit::scaled("eb", "Exabyte", "EB", K * K * K * K * K * K),
            LinearUnit::scaled("zb", "Zettabyte", "ZB", K * K * K * K * K * K * K),
            LinearUnit::scaled("yb", "Yottabyte", "YB", K * K * K * K * K * K * K * K),
        ],
    },
    UnitGroup {
        name: "Binary (IEC)",
        units: &[
            LinearUnit::scaled("kib", "Kibibyte", "KiB", KI),
            LinearUnit::scaled("mib", "Mebibyte", "MiB", KI * KI),
            LinearUnit::scaled("gib", "Gibibyte", "GiB", KI * KI * KI),
            LinearUnit::scaled("tib", "Tebibyte", "TiB", KI * KI * KI * KI),
            LinearUnit::scaled("pib", "Pebibyte", "PiB", KI * KI * KI * KI * KI),
            LinearUnit::scaled("eib", "Exbibyte", "EiB", KI * KI * KI * KI * KI * KI),
            LinearUnit::scaled("zib", "Zebibyte", "ZiB", KI * KI * KI * KI * KI * KI * KI),
            LinearUnit::scaled("yib", "Yobibyte", "YiB", KI * KI * KI * KI * KI * KI * KI * KI),
        ],
    },
    UnitGroup {
        name: "Bits",
        units: &[
            LinearUnit::divided("bit", "Bit", "bit", 8.0),
            LinearUnit::scaled("kbit", "Kilobit", "Kb", K / 8.0),
            LinearUnit::scaled("mbit", "Megabit", "Mb", K * K / 8.0),
            LinearUnit::scaled("gbit", "Gigabit", "Gb", K * K * K / 8.0),
            LinearUnit::scaled("tbit", "Terabit", "Tb", K * K * K * K / 8.0),
        ],
    },
];

// 코드는 대소문자를 구분한다: mbps(메가비트) ≠ MBps(메가바이트).
pub static TRANSFER_GROUPS: &[UnitGroup] = &[
    UnitGroup {
        name: "Bits per second",
        units: &[
            LinearUnit::base("bps", "Bit per second", "bps"),
            LinearUnit::scaled("kbps", "Kilobit per second", "kbps", K),
            LinearUnit::scaled("mbps", "Megabit per second", "Mbps", K * K),
            LinearUnit::scaled("gbps", "Gigabit per second", "Gbps", K * K * K),
            LinearUnit::scaled("tbps", "Terabit per second", "Tbps", K * K * K * K),
        ],
    },
    UnitGroup {
        name: "Bytes per second",
        units: &[
            LinearUnit::scaled("Bps", "Byte per second", "B/s", 8.0),
            LinearUnit::scaled("kBps", "Kilobyte per second", "KB/s", 8.0 * K),
            LinearUnit::scaled("MBps", "Megabyte per second", "MB/s", 8.0 * K * K),
            LinearUnit::scaled("GBps", "Gigabyte per second", "GB/s", 8.0 * K * K * K),
            LinearUnit::scaled("TBps", "Terabyte per second", "TB/s", 8.0 * K * K * K * K),
        ],
    },
];

pub static STORAGE_ALIASES: &[Alias] = &[("byte", "b"), ("bits", "bit")];

pub static TRANSFER_ALIASES: &[Alias] = &[("KBps", "kBps"), ("b/s", "bps"), ("B/s", "Bps")];
