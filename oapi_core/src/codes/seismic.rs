//! Regional seismic-design code tables used by the response-spectrum functions.

use super::host_codes;

host_codes! {
    /// How the seismic coefficients of a US code spectrum are obtained
    pub enum SeismicCoefficientOption {
        /// Coefficients entered directly
        UserCoefficients = 0,
        /// Looked up by latitude/longitude
        LatitudeLongitude = 1,
        /// Looked up by zip code
        ZipCode = 2,
    }
}

host_codes! {
    /// AASHTO 2007 site class
    pub enum SiteClassAashto2007 {
        A = 1,
        B = 2,
        C = 3,
        D = 4,
        E = 5,
        F = 6,
    }
}

host_codes! {
    /// ASCE 7-10 / ASCE 7-16 site class
    pub enum SiteClassAsce7 {
        A = 1,
        B = 2,
        C = 3,
        D = 4,
        E = 5,
        F = 6,
    }
}

host_codes! {
    /// NZS 1170.5:2004 site subsoil class
    pub enum SiteClassNzs1170 {
        /// Strong rock
        A = 1,
        /// Rock
        B = 2,
        /// Shallow soil
        C = 3,
        /// Deep or soft soil
        D = 4,
        /// Very soft soil
        E = 5,
    }
}

host_codes! {
    /// Eurocode 8 national annex
    pub enum Eurocode8Country {
        Other = 0,
        CenDefault = 1,
        Bulgaria = 2,
        Portugal = 3,
        Romania = 4,
        Slovenia = 6,
        Norway = 7,
    }
}

host_codes! {
    /// Eurocode 8 ground type
    pub enum Eurocode8GroundType {
        A = 1,
        B = 2,
        C = 3,
        D = 4,
        E = 5,
    }
}

host_codes! {
    /// Eurocode 8 spectrum type (Type 1 for high seismicity, Type 2 otherwise)
    pub enum Eurocode8SpectrumType {
        Type1 = 1,
        Type2 = 2,
    }
}

host_codes! {
    pub enum SpectrumDirection {
        Horizontal = 1,
        Vertical = 2,
    }
}

host_codes! {
    /// GB 50011-2010 seismic fortification intensity
    pub enum SeismicIntensityChinese2010 {
        /// 6 (0.05g)
        Intensity6 = 1,
        /// 7 (0.10g)
        Intensity7 = 2,
        /// 7 (0.15g)
        Intensity7High = 3,
        /// 8 (0.20g)
        Intensity8 = 4,
        /// 8 (0.30g)
        Intensity8High = 5,
        /// 9 (0.40g)
        Intensity9 = 6,
    }
}

host_codes! {
    /// GB 50011-2010 site class
    pub enum SiteClassChinese2010 {
        I0 = 1,
        I1 = 2,
        II = 3,
        III = 4,
        IV = 5,
    }
}

host_codes! {
    /// GB 50011-2010 design earthquake group
    pub enum DesignGroupChinese2010 {
        Group1 = 1,
        Group2 = 2,
        Group3 = 3,
    }
}
