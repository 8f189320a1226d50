//! Polynomial material property model with lookup caching.

use std::cell::RefCell;
use std::collections::HashMap;

use cryo_core::interp1;

use crate::error::{MaterialError, MaterialResult};

/// Number of integer-Kelvin samples in a lookup table (covers [0, 330) K).
const CACHE_GRID_LEN: usize = 330;

/// How a property query handles temperatures below the fit's valid range and
/// whether it may answer from the sampled lookup table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EvalOptions {
    /// Below this temperature the property falls linearly to zero at 0 K
    /// instead of following the polynomial (which is undefined at 0 K).
    pub extrapolate_below: Option<f64>,
    /// Answer from the integer-Kelvin lookup table, built lazily once per
    /// distinct `extrapolate_below` value and reused for the rest of the run.
    pub use_cache: bool,
}

impl EvalOptions {
    /// Direct polynomial evaluation.
    pub fn exact(extrapolate_below: Option<f64>) -> Self {
        Self {
            extrapolate_below,
            use_cache: false,
        }
    }

    /// Table lookup with linear interpolation between integer Kelvin samples.
    pub fn cached(extrapolate_below: Option<f64>) -> Self {
        Self {
            extrapolate_below,
            use_cache: true,
        }
    }
}

/// Cache tables are keyed by the extrapolation floor's bit pattern so that
/// distinct configurations never alias.
type CacheKey = Option<u64>;

fn cache_key(extrapolate_below: Option<f64>) -> CacheKey {
    extrapolate_below.map(f64::to_bits)
}

type PropertyCache = RefCell<HashMap<CacheKey, Vec<f64>>>;

/// A material with temperature-dependent thermal conductivity and specific
/// heat, each fit as `10^(sum_i c_i * log10(T)^i)`.
///
/// Immutable after construction apart from the interior lookup caches; the
/// caches use `RefCell` because the simulation loop is single-threaded and
/// queries take `&self`.
#[derive(Debug)]
pub struct Material {
    name: String,
    conductivity_coeffs: Vec<f64>,
    specific_heat_coeffs: Vec<f64>,
    conductivity_cache: PropertyCache,
    specific_heat_cache: PropertyCache,
}

impl Material {
    pub fn new(
        name: impl Into<String>,
        conductivity_coeffs: Vec<f64>,
        specific_heat_coeffs: Vec<f64>,
    ) -> MaterialResult<Self> {
        if conductivity_coeffs.is_empty() || specific_heat_coeffs.is_empty() {
            return Err(MaterialError::EmptyTable);
        }
        Ok(Self {
            name: name.into(),
            conductivity_coeffs,
            specific_heat_coeffs,
            conductivity_cache: RefCell::new(HashMap::new()),
            specific_heat_cache: RefCell::new(HashMap::new()),
        })
    }

    /// Parse a tab-separated coefficient table.
    ///
    /// One row per polynomial order in ascending powers of `log10(T)`:
    /// `label <TAB> conductivity_coeff <TAB> specific_heat_coeff`.
    /// Row labels are kept only for diagnostics in error messages.
    pub fn from_tsv(name: impl Into<String>, text: &str) -> MaterialResult<Self> {
        let mut conductivity = Vec::new();
        let mut specific_heat = Vec::new();

        for (i, raw) in text.lines().enumerate() {
            let line = i + 1;
            if raw.trim().is_empty() {
                continue;
            }
            let fields: Vec<&str> = raw.split('\t').collect();
            if fields.len() != 3 {
                return Err(MaterialError::MalformedRow {
                    line,
                    reason: format!("expected 3 tab-separated fields, found {}", fields.len()),
                });
            }
            let tc: f64 = fields[1].trim().parse().map_err(|_| {
                MaterialError::MalformedRow {
                    line,
                    reason: format!("bad conductivity coefficient {:?}", fields[1]),
                }
            })?;
            let sh: f64 = fields[2].trim().parse().map_err(|_| {
                MaterialError::MalformedRow {
                    line,
                    reason: format!("bad specific heat coefficient {:?}", fields[2]),
                }
            })?;
            conductivity.push(tc);
            specific_heat.push(sh);
        }

        Self::new(name, conductivity, specific_heat)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Thermal conductivity in W/(m·K) at `temp` Kelvin.
    pub fn conductivity(&self, temp: f64, opts: EvalOptions) -> MaterialResult<f64> {
        self.property(&self.conductivity_coeffs, &self.conductivity_cache, temp, opts)
    }

    /// Specific heat in J/(kg·K) at `temp` Kelvin.
    pub fn specific_heat(&self, temp: f64, opts: EvalOptions) -> MaterialResult<f64> {
        self.property(&self.specific_heat_coeffs, &self.specific_heat_cache, temp, opts)
    }

    fn property(
        &self,
        coeffs: &[f64],
        cache: &PropertyCache,
        temp: f64,
        opts: EvalOptions,
    ) -> MaterialResult<f64> {
        if !opts.use_cache {
            return Self::eval_exact(coeffs, temp, opts.extrapolate_below);
        }

        let key = cache_key(opts.extrapolate_below);
        if !cache.borrow().contains_key(&key) {
            let table = Self::build_table(coeffs, opts.extrapolate_below)?;
            tracing::debug!(
                material = %self.name,
                floor = ?opts.extrapolate_below,
                "built property lookup table"
            );
            cache.borrow_mut().insert(key, table);
        }

        let cache = cache.borrow();
        // Just inserted above if absent.
        let table = &cache[&key];
        Ok(Self::lookup_grid(table, temp))
    }

    /// Linear interpolation over the integer-Kelvin grid, clamped at both
    /// ends like `interp1`.
    fn lookup_grid(table: &[f64], temp: f64) -> f64 {
        if temp <= 0.0 {
            return table[0];
        }
        let last = table.len() - 1;
        if temp >= last as f64 {
            return table[last];
        }
        let lo = temp.floor() as usize;
        let frac = temp - lo as f64;
        table[lo] + frac * (table[lo + 1] - table[lo])
    }

    /// Sample the exact/extrapolated function at every integer Kelvin.
    ///
    /// Without an extrapolation floor the 0 K sample is undefined and the
    /// underlying domain error surfaces here.
    fn build_table(coeffs: &[f64], extrapolate_below: Option<f64>) -> MaterialResult<Vec<f64>> {
        (0..CACHE_GRID_LEN)
            .map(|t| Self::eval_exact(coeffs, t as f64, extrapolate_below))
            .collect()
    }

    fn eval_exact(
        coeffs: &[f64],
        temp: f64,
        extrapolate_below: Option<f64>,
    ) -> MaterialResult<f64> {
        if let Some(floor) = extrapolate_below {
            if temp < floor {
                // The property is assumed to vanish linearly toward 0 K.
                let at_floor = Self::eval_poly(coeffs, floor)?;
                return Ok(interp1(temp, &[0.0, floor], &[0.0, at_floor]));
            }
        }
        Self::eval_poly(coeffs, temp)
    }

    fn eval_poly(coeffs: &[f64], temp: f64) -> MaterialResult<f64> {
        if temp <= 0.0 {
            return Err(MaterialError::NonPositiveTemperature { temp });
        }
        let lt = temp.log10();
        let exponent: f64 = coeffs
            .iter()
            .enumerate()
            .map(|(i, c)| c * lt.powi(i as i32))
            .sum();
        Ok(10f64.powf(exponent))
    }
}
