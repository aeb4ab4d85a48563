//! Electricity cost model
//!
//! Costs are linear in power draw and tariff. Idle or free-power rigs are
//! legal inputs (zero watts or zero tariff), so nothing here guards.

/// Electricity cost for one hour of operation, in fiat units
///
/// `power_consumption_watts` is the rig's draw in watts, `electricity_rate`
/// the tariff per kWh in the selected fiat currency.
///
/// # Examples
/// ```
/// use mining_profit_calculator::calculator::cost::hourly_cost;
///
/// // 3500 W at 3.5 per kWh
/// assert_eq!(hourly_cost(3500.0, 3.5), 12.25);
/// assert_eq!(hourly_cost(0.0, 3.5), 0.0);
/// ```
pub fn hourly_cost(power_consumption_watts: f64, electricity_rate: f64) -> f64 {
    (power_consumption_watts / 1000.0) * electricity_rate
}
