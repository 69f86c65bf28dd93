//! Void branches (kongwang) of the day pillar.

use gua_ganzhi::{Branch, Pillar};

/// Void pair for each residue of the day index modulo 10.
///
/// Residues walk the six adjacent branch pairs downward from Xu-Hai, so
/// residues 6..=9 repeat the first four pairs.
const VOID_TABLE: [[Branch; 2]; 10] = [
    [Branch::Xu, Branch::Hai],
    [Branch::Shen, Branch::You],
    [Branch::Wu, Branch::Wei],
    [Branch::Chen, Branch::Si],
    [Branch::Yin, Branch::Mao],
    [Branch::Zi, Branch::Chou],
    [Branch::Xu, Branch::Hai],
    [Branch::Shen, Branch::You],
    [Branch::Wu, Branch::Wei],
    [Branch::Chen, Branch::Si],
];

/// The two void branches for `day`.
pub fn void_branches(day: Pillar) -> [Branch; 2] {
    VOID_TABLE[(day.index() % 10) as usize]
}
