use super::{Alias, LinearUnit, UnitGroup};

/// 길이 단위. 내부 기준은 미터이다.
pub static GROUPS: &[UnitGroup] = &[UnitGroup {
    name: "Length",
    units: &[
        LinearUnit::base("m", "Meter", "m"),
        LinearUnit::scaled("km", "Kilometer", "km", 1000.0),
        LinearUnit::divided("cm", "Centimeter", "cm", 100.0),
        LinearUnit::divided("mm", "Millimeter", "mm", 1000.0),
        LinearUnit::divided("um", "Micrometer", "μm", 1_000_000.0),
        LinearUnit::divided("nm", "Nanometer", "nm", 1_000_000_000.0),
        LinearUnit::scaled("mi", "Mile", "mi", 1609.344),
        LinearUnit::scaled("yd", "Yard", "yd", 0.9144),
        LinearUnit::scaled("ft", "Foot", "ft", 0.3048),
        LinearUnit::scaled("in", "Inch", "in", 0.0254),
        LinearUnit::scaled("nmi", "Nautical Mile", "nmi", 1852.0),
        LinearUnit::scaled("ly", "Light Year", "ly", 9.461e15),
        LinearUnit::scaled("au", "Astronomical Unit", "AU", 149_597_870_700.0),
    ],
}];

pub static ALIASES: &[Alias] = &[];
