//! Model-level code tables: units, materials, section and load pattern types.

use super::host_codes;

host_codes! {
    /// Force, length and temperature unit set
    pub enum Units {
        LbInF = 1,
        LbFtF = 2,
        KipInF = 3,
        KipFtF = 4,
        KnMmC = 5,
        KnMC = 6,
        KgfMmC = 7,
        KgfMC = 8,
        NMmC = 9,
        NMC = 10,
        TonMmC = 11,
        TonMC = 12,
        KnCmC = 13,
        KgfCmC = 14,
        NCmC = 15,
        TonCmC = 16,
    }
}

impl Units {
    /// Short label, e.g. `kip, ft, F`
    pub fn label(self) -> &'static str {
        match self {
            Units::LbInF => "lb, in, F",
            Units::LbFtF => "lb, ft, F",
            Units::KipInF => "kip, in, F",
            Units::KipFtF => "kip, ft, F",
            Units::KnMmC => "kN, mm, C",
            Units::KnMC => "kN, m, C",
            Units::KgfMmC => "kgf, mm, C",
            Units::KgfMC => "kgf, m, C",
            Units::NMmC => "N, mm, C",
            Units::NMC => "N, m, C",
            Units::TonMmC => "Ton, mm, C",
            Units::TonMC => "Ton, m, C",
            Units::KnCmC => "kN, cm, C",
            Units::KgfCmC => "kgf, cm, C",
            Units::NCmC => "N, cm, C",
            Units::TonCmC => "Ton, cm, C",
        }
    }

    /// Whether the unit set is US customary
    pub fn is_us_customary(self) -> bool {
        matches!(self, Units::LbInF | Units::LbFtF | Units::KipInF | Units::KipFtF)
    }
}

host_codes! {
    /// Material type. Calls that accept an optional type forward `0` for "all".
    pub enum MaterialType {
        Steel = 1,
        Concrete = 2,
        NoDesign = 3,
        Aluminum = 4,
        ColdFormed = 5,
        Rebar = 6,
        Tendon = 7,
        Masonry = 8,
    }
}

host_codes! {
    pub enum ShellType {
        ShellThin = 1,
        ShellThick = 2,
        PlateThin = 3,
        PlateThick = 4,
        Membrane = 5,
        ShellLayered = 6,
    }
}

impl ShellType {
    /// Whether drilling degrees of freedom are meaningful for this type
    pub fn supports_drilling_dof(self) -> bool {
        !matches!(self, ShellType::Membrane | ShellType::ShellLayered)
    }
}

host_codes! {
    pub enum PlaneType {
        PlaneStress = 1,
        PlaneStrain = 2,
    }
}

host_codes! {
    pub enum AreaPropertyType {
        Shell = 1,
        Plane = 2,
        Asolid = 3,
    }
}

host_codes! {
    /// Frame section property type
    pub enum FramePropType {
        I = 1,
        Channel = 2,
        T = 3,
        Angle = 4,
        DoubleAngle = 5,
        Box = 6,
        Pipe = 7,
        Rectangular = 8,
        Circle = 9,
        General = 10,
        DoubleChannel = 11,
        Auto = 12,
        SectionDesigner = 13,
        Variable = 14,
        Joist = 15,
        Bridge = 16,
    }
}

host_codes! {
    /// Load pattern type
    pub enum LoadPatternType {
        Dead = 1,
        SuperDead = 2,
        Live = 3,
        ReduceLive = 4,
        Quake = 5,
        Wind = 6,
        Snow = 7,
        Other = 8,
        Move = 9,
        Temperature = 10,
        RoofLive = 11,
        Notional = 12,
        PatternLive = 13,
        Wave = 14,
        Braking = 15,
        Centrifugal = 16,
        Friction = 17,
        Ice = 18,
        WindOnLiveLoad = 19,
        HorizontalEarthPressure = 20,
        VerticalEarthPressure = 21,
        EarthSurcharge = 22,
        DownDrag = 23,
        VehicleCollision = 24,
        VesselCollision = 25,
        TemperatureGradient = 26,
        Settlement = 27,
        Shrinkage = 28,
        Creep = 29,
        WaterLoadPressure = 30,
        LiveLoadSurcharge = 31,
        LockedInForces = 32,
        PedestrianLive = 33,
        Prestress = 34,
        Hyperstatic = 35,
        Buoyancy = 36,
        StreamFlow = 37,
        Impact = 38,
        Construction = 39,
    }
}

impl LoadPatternType {
    /// Whether the type only exists for bridge-capable products
    pub fn is_bridge_specific(self) -> bool {
        (15..=39).contains(&crate::codes::HostCode::to_code(self))
    }
}

host_codes! {
    /// Concrete stress-strain curve definition
    pub enum ConcreteStressStrainType {
        User = 0,
        ParametricSimple = 1,
        ParametricMander = 2,
    }
}

host_codes! {
    /// Steel stress-strain curve definition
    pub enum SteelStressStrainType {
        User = 0,
        ParametricSimple = 1,
        ParametricPark = 2,
    }
}

host_codes! {
    pub enum HysteresisType {
        Elastic = 0,
        Kinematic = 1,
        Takeda = 2,
        Pivot = 3,
        Concrete = 4,
        BrbHardening = 5,
        Degrading = 6,
        Isotropic = 7,
    }
}

host_codes! {
    /// Whether a material's unit weight or unit mass is the given quantity
    pub enum WeightOrMass {
        Weight = 1,
        Mass = 2,
    }
}
