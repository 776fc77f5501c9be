// Fantasy-point scoring: fixed linear weights over projected season stats.

use serde::{Deserialize, Serialize};

/// Projected hitting stats used by the hitter formula.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HitterStats {
    pub h: f64,
    pub singles: f64,
    pub doubles: f64,
    pub triples: f64,
    pub hr: f64,
    pub rbi: f64,
    pub sb: f64,
    pub cs: f64,
    pub k: f64,
    pub sac: f64,
}

/// Projected pitching stats used by the pitcher formula.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PitcherStats {
    pub gs: f64,
    pub ip: f64,
    pub bb: f64,
    pub er: f64,
    pub po: f64,
    pub qs: f64,
    pub w: f64,
    pub l: f64,
    pub sv: f64,
    pub bs: f64,
    pub cg: f64,
    pub nh: f64,
    pub pg: f64,
}

/// `H + 1B + 2*2B + 3*3B + 4*HR + RBI + SB - CS - K + 0.5*SAC`
///
/// Hits count once on their own and again by type, so a home run is worth
/// five points before the RBI it produces.
pub fn hitter_points(s: &HitterStats) -> f64 {
    s.h + s.singles + 2.0 * s.doubles + 3.0 * s.triples + 4.0 * s.hr + s.rbi + s.sb
        - s.cs
        - s.k
        + 0.5 * s.sac
}

/// `5*GS + IP - 0.5*BB - ER + PO + 3*QS + 7*W - 3*L + 7*SV - 3*BS + 10*CG + 25*NH + 35*PG`
pub fn pitcher_points(s: &PitcherStats) -> f64 {
    5.0 * s.gs + s.ip - 0.5 * s.bb - s.er + s.po + 3.0 * s.qs + 7.0 * s.w - 3.0 * s.l
        + 7.0 * s.sv
        - 3.0 * s.bs
        + 10.0 * s.cg
        + 25.0 * s.nh
        + 35.0 * s.pg
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn hitter_formula_weights() {
        let stats = HitterStats {
            h: 150.0,
            singles: 90.0,
            doubles: 30.0,
            triples: 3.0,
            hr: 27.0,
            rbi: 95.0,
            sb: 12.0,
            cs: 4.0,
            k: 120.0,
            sac: 2.0,
        };
        // 150 + 90 + 60 + 9 + 108 + 95 + 12 - 4 - 120 + 1
        assert!(approx_eq(hitter_points(&stats), 401.0));
    }

    #[test]
    fn hitter_single_home_run() {
        let stats = HitterStats {
            h: 1.0,
            hr: 1.0,
            rbi: 1.0,
            ..Default::default()
        };
        assert!(approx_eq(hitter_points(&stats), 6.0));
    }

    #[test]
    fn hitter_penalties_can_go_negative() {
        let stats = HitterStats {
            k: 10.0,
            cs: 2.0,
            ..Default::default()
        };
        assert!(approx_eq(hitter_points(&stats), -12.0));
    }

    #[test]
    fn pitcher_formula_weights() {
        let stats = PitcherStats {
            gs: 30.0,
            ip: 180.0,
            bb: 50.0,
            er: 70.0,
            po: 540.0,
            qs: 18.0,
            w: 12.0,
            l: 8.0,
            sv: 0.0,
            bs: 0.0,
            cg: 1.0,
            nh: 0.0,
            pg: 0.0,
        };
        // 150 + 180 - 25 - 70 + 540 + 54 + 84 - 24 + 0 - 0 + 10
        assert!(approx_eq(pitcher_points(&stats), 899.0));
    }

    #[test]
    fn pitcher_bonus_events() {
        let stats = PitcherStats {
            cg: 1.0,
            nh: 1.0,
            pg: 1.0,
            ..Default::default()
        };
        assert!(approx_eq(pitcher_points(&stats), 70.0));
    }

    #[test]
    fn reliever_saves_and_blown_saves() {
        let stats = PitcherStats {
            ip: 65.0,
            sv: 30.0,
            bs: 5.0,
            ..Default::default()
        };
        assert!(approx_eq(pitcher_points(&stats), 65.0 + 210.0 - 15.0));
    }

    #[test]
    fn empty_lines_score_zero() {
        assert!(approx_eq(hitter_points(&HitterStats::default()), 0.0));
        assert!(approx_eq(pitcher_points(&PitcherStats::default()), 0.0));
    }
}
