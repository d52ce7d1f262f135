use super::code::serialize_as_code;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemCategory {
    Employment,
    Rd,
    Investment,
    Startup,
}

impl ItemCategory {
    pub const ALL: [ItemCategory; 4] = [
        ItemCategory::Employment,
        ItemCategory::Rd,
        ItemCategory::Investment,
        ItemCategory::Startup,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            ItemCategory::Employment => "EMPLOYMENT",
            ItemCategory::Rd => "RD",
            ItemCategory::Investment => "INVESTMENT",
            ItemCategory::Startup => "STARTUP",
        }
    }

    /// Statutory provision (Restriction of Special Taxation Act article) the
    /// category is claimed under.
    pub const fn provision(&self) -> &'static str {
        match self {
            ItemCategory::Employment => "조특법30의4",
            ItemCategory::Rd => "조특법10",
            ItemCategory::Investment => "조특법24",
            ItemCategory::Startup => "조특법6",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZoneType {
    NonCapital,
    Capital,
    CapitalCongestion,
    Depopulation,
}

impl ZoneType {
    pub fn code(&self) -> &'static str {
        match self {
            ZoneType::NonCapital => "NON_CAPITAL",
            ZoneType::Capital => "CAPITAL",
            ZoneType::CapitalCongestion => "CAPITAL_CONGESTION",
            ZoneType::Depopulation => "DEPOPULATION",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetType {
    Facility,
}

impl AssetType {
    pub fn code(&self) -> &'static str {
        match self {
            AssetType::Facility => "FACILITY",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RdType {
    /// New-growth / source technology R&D.
    NewGrowth,
    General,
}

impl RdType {
    pub fn code(&self) -> &'static str {
        match self {
            RdType::NewGrowth => "NEW_GROWTH",
            RdType::General => "GENERAL",
        }
    }
}

/// How the R&D credit base is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RdMethod {
    Increment,
    Current,
}

impl RdMethod {
    pub fn code(&self) -> &'static str {
        match self {
            RdMethod::Increment => "INCREMENT",
            RdMethod::Current => "CURRENT",
        }
    }
}

serialize_as_code!(ItemCategory, ZoneType, AssetType, RdType, RdMethod);

/// One claimed tax-credit or exemption line.
#[derive(Debug, Clone)]
pub struct DeductionItem {
    pub item_category: ItemCategory,
    pub provision: &'static str,
    pub tax_year: &'static str,
    /// Unique within (case, category, tax year).
    pub item_seq: u32,
    pub base_amount: i64,
    pub zone_type: Option<ZoneType>,
    pub asset_type: Option<AssetType>,
    pub rd_type: Option<RdType>,
    pub method: Option<RdMethod>,
    pub existing_applied: bool,
    pub existing_amount: i64,
    pub carryforward_balance: i64,
}

impl DeductionItem {
    const fn blank(item_category: ItemCategory, tax_year: &'static str, base_amount: i64) -> Self {
        Self {
            item_category,
            provision: item_category.provision(),
            tax_year,
            item_seq: 1,
            base_amount,
            zone_type: None,
            asset_type: None,
            rd_type: None,
            method: None,
            existing_applied: false,
            existing_amount: 0,
            carryforward_balance: 0,
        }
    }

    pub const fn employment(tax_year: &'static str, zone_type: ZoneType) -> Self {
        Self {
            zone_type: Some(zone_type),
            ..Self::blank(ItemCategory::Employment, tax_year, 0)
        }
    }

    pub const fn rd(
        tax_year: &'static str,
        base_amount: i64,
        rd_type: RdType,
        method: RdMethod,
    ) -> Self {
        Self {
            rd_type: Some(rd_type),
            method: Some(method),
            ..Self::blank(ItemCategory::Rd, tax_year, base_amount)
        }
    }

    pub const fn investment(
        tax_year: &'static str,
        base_amount: i64,
        zone_type: ZoneType,
        asset_type: AssetType,
    ) -> Self {
        Self {
            zone_type: Some(zone_type),
            asset_type: Some(asset_type),
            ..Self::blank(ItemCategory::Investment, tax_year, base_amount)
        }
    }

    pub const fn startup(tax_year: &'static str, base_amount: i64, zone_type: ZoneType) -> Self {
        Self {
            zone_type: Some(zone_type),
            ..Self::blank(ItemCategory::Startup, tax_year, base_amount)
        }
    }

    /// Marks the item as already applied in the original filing, with the
    /// amount applied and the credit still carried forward.
    pub const fn with_existing(self, existing_amount: i64, carryforward_balance: i64) -> Self {
        Self {
            existing_applied: true,
            existing_amount,
            carryforward_balance,
            ..self
        }
    }

    pub const fn with_seq(self, item_seq: u32) -> Self {
        Self { item_seq, ..self }
    }
}
