/// Clean-configuration parabolic polar `C_D = C_D0 + k·C_L²`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CleanPolar {
    pub cd0: f64,
    pub k: f64,
    /// Oswald efficiency the induced-drag factor was derived from.
    pub e: f64,
}

/// Trailing-edge flap drag parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlapPolar {
    /// Flap span efficiency `λf`.
    pub lambda_f: f64,
    /// Flap chord to wing chord ratio `cf/c`.
    pub cf_c: f64,
    /// Flapped area to wing area ratio `Sf/S`.
    pub sf_s: f64,
}

/// Drag polar of one aircraft type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragPolar {
    pub clean: CleanPolar,
    pub flaps: FlapPolar,
}
