//! Node data for the three skill trees.
//!
//! Every branch follows the same ten-node shape: a root, two children, a
//! row of three with a shared 1-level merge node in the middle, a row of
//! three and a 1-level capstone that needs any of the row above.
//! Reordering, adding or removing nodes changes the canonical order the
//! codec depends on, and old share links stop decoding. Changing a cap is
//! safe: stale levels are clamped on load.

use crate::model::{Branch, BranchColor, GridPos, NodeDef, Tree, TreeKind};

macro_rules! node {
    ($id:literal, $name:literal, $max:literal, [$($parent:literal),*], ($col:literal, $row:literal)) => {
        NodeDef {
            id: $id,
            name: $name,
            max_level: $max,
            parents: &[$($parent),*],
            pos: GridPos { col: $col, row: $row },
        }
    };
}

pub static GUARDIAN: Tree = Tree {
    kind: TreeKind::Guardian,
    branches: &[
        Branch {
            color: BranchColor::Yellow,
            nodes: &[
                node!("attack_boost", "Attack Boost", 50, [], (1, 0)),
                node!("crit_chance", "Crit Chance", 50, ["attack_boost"], (0, 1)),
                node!("crit_damage", "Crit Damage", 50, ["attack_boost"], (2, 1)),
                node!("armor_pierce", "Armor Pierce", 100, ["crit_chance"], (0, 2)),
                node!("overcharge", "Overcharge", 1, ["crit_chance", "crit_damage"], (1, 2)),
                node!("attack_speed", "Attack Speed", 100, ["crit_damage"], (2, 2)),
                node!("execute", "Execute", 50, ["armor_pierce"], (0, 3)),
                node!("focus_fire", "Focus Fire", 50, ["overcharge"], (1, 3)),
                node!("rapid_reload", "Rapid Reload", 50, ["attack_speed"], (2, 3)),
                node!("titan_strike", "Titan Strike", 1, ["execute", "focus_fire", "rapid_reload"], (1, 4)),
            ],
        },
        Branch {
            color: BranchColor::Orange,
            nodes: &[
                node!("hull_plating", "Hull Plating", 50, [], (4, 0)),
                node!("shield_capacity", "Shield Capacity", 50, ["hull_plating"], (3, 1)),
                node!("shield_regen", "Shield Regen", 50, ["hull_plating"], (5, 1)),
                node!("reinforced_hull", "Reinforced Hull", 100, ["shield_capacity"], (3, 2)),
                node!("bulwark", "Bulwark", 1, ["shield_capacity", "shield_regen"], (4, 2)),
                node!("damage_reduction", "Damage Reduction", 100, ["shield_regen"], (5, 2)),
                node!("thorns", "Thorns", 50, ["reinforced_hull"], (3, 3)),
                node!("emergency_shield", "Emergency Shield", 50, ["bulwark"], (4, 3)),
                node!("fortress", "Fortress", 50, ["damage_reduction"], (5, 3)),
                node!("last_stand", "Last Stand", 1, ["thorns", "emergency_shield", "fortress"], (4, 4)),
            ],
        },
        Branch {
            color: BranchColor::Blue,
            nodes: &[
                node!("crystal_yield", "Crystal Yield", 50, [], (7, 0)),
                node!("salvage", "Salvage", 50, ["crystal_yield"], (6, 1)),
                node!("repair_drones", "Repair Drones", 50, ["crystal_yield"], (8, 1)),
                node!("drone_count", "Drone Count", 100, ["salvage"], (6, 2)),
                node!("resonance", "Resonance", 1, ["salvage", "repair_drones"], (7, 2)),
                node!("repair_rate", "Repair Rate", 100, ["repair_drones"], (8, 2)),
                node!("crystal_magnet", "Crystal Magnet", 50, ["drone_count"], (6, 3)),
                node!("overclock_drones", "Overclock Drones", 50, ["resonance"], (7, 3)),
                node!("efficient_repairs", "Efficient Repairs", 50, ["repair_rate"], (8, 3)),
                node!("guardian_aegis", "Guardian Aegis", 1, ["crystal_magnet", "overclock_drones", "efficient_repairs"], (7, 4)),
            ],
        },
    ],
};

pub static VANGUARD: Tree = Tree {
    kind: TreeKind::Vanguard,
    branches: &[
        Branch {
            color: BranchColor::Yellow,
            nodes: &[
                node!("blade_damage", "Blade Damage", 50, [], (1, 0)),
                node!("dash_cooldown", "Dash Cooldown", 50, ["blade_damage"], (0, 1)),
                node!("blade_reach", "Blade Reach", 50, ["blade_damage"], (2, 1)),
                node!("lunge", "Lunge", 100, ["dash_cooldown"], (0, 2)),
                node!("momentum", "Momentum", 1, ["dash_cooldown", "blade_reach"], (1, 2)),
                node!("cleave", "Cleave", 100, ["blade_reach"], (2, 2)),
                node!("bleed", "Bleed", 50, ["lunge"], (0, 3)),
                node!("whirlwind", "Whirlwind", 50, ["momentum"], (1, 3)),
                node!("riposte", "Riposte", 50, ["cleave"], (2, 3)),
                node!("vanguard_fury", "Vanguard Fury", 1, ["bleed", "whirlwind", "riposte"], (1, 4)),
            ],
        },
        Branch {
            color: BranchColor::Orange,
            nodes: &[
                node!("evasion", "Evasion", 50, [], (4, 0)),
                node!("move_speed", "Move Speed", 50, ["evasion"], (3, 1)),
                node!("dodge_recovery", "Dodge Recovery", 50, ["evasion"], (5, 1)),
                node!("afterimage", "Afterimage", 100, ["move_speed"], (3, 2)),
                node!("adrenaline", "Adrenaline", 1, ["move_speed", "dodge_recovery"], (4, 2)),
                node!("sprint", "Sprint", 100, ["dodge_recovery"], (5, 2)),
                node!("counter_stance", "Counter Stance", 50, ["afterimage"], (3, 3)),
                node!("phase_step", "Phase Step", 50, ["adrenaline"], (4, 3)),
                node!("second_wind", "Second Wind", 50, ["sprint"], (5, 3)),
                node!("unbreakable", "Unbreakable", 1, ["counter_stance", "phase_step", "second_wind"], (4, 4)),
            ],
        },
        Branch {
            color: BranchColor::Blue,
            nodes: &[
                node!("combo_window", "Combo Window", 50, [], (7, 0)),
                node!("energy_regen", "Energy Regen", 50, ["combo_window"], (6, 1)),
                node!("energy_cap", "Energy Cap", 50, ["combo_window"], (8, 1)),
                node!("chain_strike", "Chain Strike", 100, ["energy_regen"], (6, 2)),
                node!("battle_rhythm", "Battle Rhythm", 1, ["energy_regen", "energy_cap"], (7, 2)),
                node!("cooldown_reduction", "Cooldown Reduction", 100, ["energy_cap"], (8, 2)),
                node!("finisher", "Finisher", 50, ["chain_strike"], (6, 3)),
                node!("flow_state", "Flow State", 50, ["battle_rhythm"], (7, 3)),
                node!("relentless", "Relentless", 50, ["cooldown_reduction"], (8, 3)),
                node!("vanguard_zenith", "Vanguard Zenith", 1, ["finisher", "flow_state", "relentless"], (7, 4)),
            ],
        },
    ],
};

pub static CANNON: Tree = Tree {
    kind: TreeKind::Cannon,
    branches: &[
        Branch {
            color: BranchColor::Yellow,
            nodes: &[
                node!("shell_damage", "Shell Damage", 50, [], (1, 0)),
                node!("blast_radius", "Blast Radius", 50, ["shell_damage"], (0, 1)),
                node!("shell_velocity", "Shell Velocity", 50, ["shell_damage"], (2, 1)),
                node!("heavy_shells", "Heavy Shells", 100, ["blast_radius"], (0, 2)),
                node!("concussion", "Concussion", 1, ["blast_radius", "shell_velocity"], (1, 2)),
                node!("splash_damage", "Splash Damage", 100, ["shell_velocity"], (2, 2)),
                node!("incendiary", "Incendiary", 50, ["heavy_shells"], (0, 3)),
                node!("cluster_shells", "Cluster Shells", 50, ["concussion"], (1, 3)),
                node!("siege_mode", "Siege Mode", 50, ["splash_damage"], (2, 3)),
                node!("cannon_barrage", "Cannon Barrage", 1, ["incendiary", "cluster_shells", "siege_mode"], (1, 4)),
            ],
        },
        Branch {
            color: BranchColor::Orange,
            nodes: &[
                node!("barrel_cooling", "Barrel Cooling", 50, [], (4, 0)),
                node!("reload_speed", "Reload Speed", 50, ["barrel_cooling"], (3, 1)),
                node!("ammo_capacity", "Ammo Capacity", 50, ["barrel_cooling"], (5, 1)),
                node!("autoloader", "Autoloader", 100, ["reload_speed"], (3, 2)),
                node!("steady_aim", "Steady Aim", 1, ["reload_speed", "ammo_capacity"], (4, 2)),
                node!("heat_sink", "Heat Sink", 100, ["ammo_capacity"], (5, 2)),
                node!("double_shot", "Double Shot", 50, ["autoloader"], (3, 3)),
                node!("range_finder", "Range Finder", 50, ["steady_aim"], (4, 3)),
                node!("rapid_fire", "Rapid Fire", 50, ["heat_sink"], (5, 3)),
                node!("meltdown", "Meltdown", 1, ["double_shot", "range_finder", "rapid_fire"], (4, 4)),
            ],
        },
        Branch {
            color: BranchColor::Blue,
            nodes: &[
                node!("targeting", "Targeting", 50, [], (7, 0)),
                node!("long_range", "Long Range", 50, ["targeting"], (6, 1)),
                node!("tracking", "Tracking", 50, ["targeting"], (8, 1)),
                node!("weak_spot", "Weak Spot", 100, ["long_range"], (6, 2)),
                node!("scanner", "Scanner", 1, ["long_range", "tracking"], (7, 2)),
                node!("marked_target", "Marked Target", 100, ["tracking"], (8, 2)),
                node!("ricochet", "Ricochet", 50, ["weak_spot"], (6, 3)),
                node!("overwatch", "Overwatch", 50, ["scanner"], (7, 3)),
                node!("deadeye", "Deadeye", 50, ["marked_target"], (8, 3)),
                node!("cannon_apocalypse", "Cannon Apocalypse", 1, ["ricochet", "overwatch", "deadeye"], (7, 4)),
            ],
        },
    ],
};
