//! The design-system swatch table.
//!
//! A hue × shade grid in the style of utility-first CSS frameworks:
//! 21 hue families (four neutrals and seventeen chromatic hues), each with
//! eleven shades from 50 (lightest) to 950 (darkest). Entries are named
//! `<hue>-<shade>`.

use crate::table::NamedColor;

/// Shade steps, lightest first.
pub const SHADES: [u16; 11] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900, 950];

/// Swatches grouped by hue, each group ordered lightest to darkest.
pub static DESIGN_SYSTEM_SWATCHES: &[NamedColor] = &[
    // slate
    NamedColor::new("slate-50", 0xF8FAFC),
    NamedColor::new("slate-100", 0xF1F5F9),
    NamedColor::new("slate-200", 0xE2E8F0),
    NamedColor::new("slate-300", 0xCBD5E1),
    NamedColor::new("slate-400", 0x94A3B8),
    NamedColor::new("slate-500", 0x64748B),
    NamedColor::new("slate-600", 0x475569),
    NamedColor::new("slate-700", 0x334155),
    NamedColor::new("slate-800", 0x1E293B),
    NamedColor::new("slate-900", 0x0F172A),
    NamedColor::new("slate-950", 0x020617),

    // gray
    NamedColor::new("gray-50", 0xF9FAFB),
    NamedColor::new("gray-100", 0xF3F4F6),
    NamedColor::new("gray-200", 0xE5E7EB),
    NamedColor::new("gray-300", 0xD1D5DB),
    NamedColor::new("gray-400", 0x9CA3AF),
    NamedColor::new("gray-500", 0x6B7280),
    NamedColor::new("gray-600", 0x4B5563),
    NamedColor::new("gray-700", 0x374151),
    NamedColor::new("gray-800", 0x1F2937),
    NamedColor::new("gray-900", 0x111827),
    NamedColor::new("gray-950", 0x030712),

    // zinc
    NamedColor::new("zinc-50", 0xFAFAFA),
    NamedColor::new("zinc-100", 0xF4F4F5),
    NamedColor::new("zinc-200", 0xE4E4E7),
    NamedColor::new("zinc-300", 0xD4D4D8),
    NamedColor::new("zinc-400", 0xA1A1AA),
    NamedColor::new("zinc-500", 0x71717A),
    NamedColor::new("zinc-600", 0x52525B),
    NamedColor::new("zinc-700", 0x3F3F46),
    NamedColor::new("zinc-800", 0x27272A),
    NamedColor::new("zinc-900", 0x18181B),
    NamedColor::new("zinc-950", 0x09090B),

    // stone
    NamedColor::new("stone-50", 0xFAFAF9),
    NamedColor::new("stone-100", 0xF5F5F4),
    NamedColor::new("stone-200", 0xE7E5E4),
    NamedColor::new("stone-300", 0xD6D3D1),
    NamedColor::new("stone-400", 0xA8A29E),
    NamedColor::new("stone-500", 0x78716C),
    NamedColor::new("stone-600", 0x57534E),
    NamedColor::new("stone-700", 0x44403C),
    NamedColor::new("stone-800", 0x292524),
    NamedColor::new("stone-900", 0x1C1917),
    NamedColor::new("stone-950", 0x0C0A09),

    // red
    NamedColor::new("red-50", 0xFEF2F2),
    NamedColor::new("red-100", 0xFEE2E2),
    NamedColor::new("red-200", 0xFECACA),
    NamedColor::new("red-300", 0xFCA5A5),
    NamedColor::new("red-400", 0xF87171),
    NamedColor::new("red-500", 0xEF4444),
    NamedColor::new("red-600", 0xDC2626),
    NamedColor::new("red-700", 0xB91C1C),
    NamedColor::new("red-800", 0x991B1B),
    NamedColor::new("red-900", 0x7F1D1D),
    NamedColor::new("red-950", 0x450A0A),

    // orange
    NamedColor::new("orange-50", 0xFFF7ED),
    NamedColor::new("orange-100", 0xFFEDD5),
    NamedColor::new("orange-200", 0xFED7AA),
    NamedColor::new("orange-300", 0xFDBA74),
    NamedColor::new("orange-400", 0xFB923C),
    NamedColor::new("orange-500", 0xF97316),
    NamedColor::new("orange-600", 0xEA580C),
    NamedColor::new("orange-700", 0xC2410C),
    NamedColor::new("orange-800", 0x9A3412),
    NamedColor::new("orange-900", 0x7C2D12),
    NamedColor::new("orange-950", 0x431407),

    // amber
    NamedColor::new("amber-50", 0xFFFBEB),
    NamedColor::new("amber-100", 0xFEF3C7),
    NamedColor::new("amber-200", 0xFDE68A),
    NamedColor::new("amber-300", 0xFCD34D),
    NamedColor::new("amber-400", 0xFBBF24),
    NamedColor::new("amber-500", 0xF59E0B),
    NamedColor::new("amber-600", 0xD97706),
    NamedColor::new("amber-700", 0xB45309),
    NamedColor::new("amber-800", 0x92400E),
    NamedColor::new("amber-900", 0x78350F),
    NamedColor::new("amber-950", 0x451A03),

    // yellow
    NamedColor::new("yellow-50", 0xFEFCE8),
    NamedColor::new("yellow-100", 0xFEF9C3),
    NamedColor::new("yellow-200", 0xFEF08A),
    NamedColor::new("yellow-300", 0xFDE047),
    NamedColor::new("yellow-400", 0xFACC15),
    NamedColor::new("yellow-500", 0xEAB308),
    NamedColor::new("yellow-600", 0xCA8A04),
    NamedColor::new("yellow-700", 0xA16207),
    NamedColor::new("yellow-800", 0x854D0E),
    NamedColor::new("yellow-900", 0x713F12),
    NamedColor::new("yellow-950", 0x422006),

    // lime
    NamedColor::new("lime-50", 0xF7FEE7),
    NamedColor::new("lime-100", 0xECFCCB),
    NamedColor::new("lime-200", 0xD9F99D),
    NamedColor::new("lime-300", 0xBEF264),
    NamedColor::new("lime-400", 0xA3E635),
    NamedColor::new("lime-500", 0x84CC16),
    NamedColor::new("lime-600", 0x65A30D),
    NamedColor::new("lime-700", 0x4D7C0F),
    NamedColor::new("lime-800", 0x3F6212),
    NamedColor::new("lime-900", 0x365314),
    NamedColor::new("lime-950", 0x1A2E05),

    // green
    NamedColor::new("green-50", 0xF0FDF4),
    NamedColor::new("green-100", 0xDCFCE7),
    NamedColor::new("green-200", 0xBBF7D0),
    NamedColor::new("green-300", 0x86EFAC),
    NamedColor::new("green-400", 0x4ADE80),
    NamedColor::new("green-500", 0x22C55E),
    NamedColor::new("green-600", 0x16A34A),
    NamedColor::new("green-700", 0x15803D),
    NamedColor::new("green-800", 0x166534),
    NamedColor::new("green-900", 0x14532D),
    NamedColor::new("green-950", 0x052E16),

    // emerald
    NamedColor::new("emerald-50", 0xECFDF5),
    NamedColor::new("emerald-100", 0xD1FAE5),
    NamedColor::new("emerald-200", 0xA7F3D0),
    NamedColor::new("emerald-300", 0x6EE7B7),
    NamedColor::new("emerald-400", 0x34D399),
    NamedColor::new("emerald-500", 0x10B981),
    NamedColor::new("emerald-600", 0x059669),
    NamedColor::new("emerald-700", 0x047857),
    NamedColor::new("emerald-800", 0x065F46),
    NamedColor::new("emerald-900", 0x064E3B),
    NamedColor::new("emerald-950", 0x022C22),

    // teal
    NamedColor::new("teal-50", 0xF0FDFA),
    NamedColor::new("teal-100", 0xCCFBF1),
    NamedColor::new("teal-200", 0x99F6E4),
    NamedColor::new("teal-300", 0x5EEAD4),
    NamedColor::new("teal-400", 0x2DD4BF),
    NamedColor::new("teal-500", 0x14B8A6),
    NamedColor::new("teal-600", 0x0D9488),
    NamedColor::new("teal-700", 0x0F766E),
    NamedColor::new("teal-800", 0x115E59),
    NamedColor::new("teal-900", 0x134E4A),
    NamedColor::new("teal-950", 0x042F2E),

    // cyan
    NamedColor::new("cyan-50", 0xECFEFF),
    NamedColor::new("cyan-100", 0xCFFAFE),
    NamedColor::new("cyan-200", 0xA5F3FC),
    NamedColor::new("cyan-300", 0x67E8F9),
    NamedColor::new("cyan-400", 0x22D3EE),
    NamedColor::new("cyan-500", 0x06B6D4),
    NamedColor::new("cyan-600", 0x0891B2),
    NamedColor::new("cyan-700", 0x0E7490),
    NamedColor::new("cyan-800", 0x155E75),
    NamedColor::new("cyan-900", 0x164E63),
    NamedColor::new("cyan-950", 0x083344),

    // sky
    NamedColor::new("sky-50", 0xF0F9FF),
    NamedColor::new("sky-100", 0xE0F2FE),
    NamedColor::new("sky-200", 0xBAE6FD),
    NamedColor::new("sky-300", 0x7DD3FC),
    NamedColor::new("sky-400", 0x38BDF8),
    NamedColor::new("sky-500", 0x0EA5E9),
    NamedColor::new("sky-600", 0x0284C7),
    NamedColor::new("sky-700", 0x0369A1),
    NamedColor::new("sky-800", 0x075985),
    NamedColor::new("sky-900", 0x0C4A6E),
    NamedColor::new("sky-950", 0x082F49),

    // blue
    NamedColor::new("blue-50", 0xEFF6FF),
    NamedColor::new("blue-100", 0xDBEAFE),
    NamedColor::new("blue-200", 0xBFDBFE),
    NamedColor::new("blue-300", 0x93C5FD),
    NamedColor::new("blue-400", 0x60A5FA),
    NamedColor::new("blue-500", 0x3B82F6),
    NamedColor::new("blue-600", 0x2563EB),
    NamedColor::new("blue-700", 0x1D4ED8),
    NamedColor::new("blue-800", 0x1E40AF),
    NamedColor::new("blue-900", 0x1E3A8A),
    NamedColor::new("blue-950", 0x172554),

    // indigo
    NamedColor::new("indigo-50", 0xEEF2FF),
    NamedColor::new("indigo-100", 0xE0E7FF),
    NamedColor::new("indigo-200", 0xC7D2FE),
    NamedColor::new("indigo-300", 0xA5B4FC),
    NamedColor::new("indigo-400", 0x818CF8),
    NamedColor::new("indigo-500", 0x6366F1),
    NamedColor::new("indigo-600", 0x4F46E5),
    NamedColor::new("indigo-700", 0x4338CA),
    NamedColor::new("indigo-800", 0x3730A3),
    NamedColor::new("indigo-900", 0x312E81),
    NamedColor::new("indigo-950", 0x1E1B4B),

    // violet
    NamedColor::new("violet-50", 0xF5F3FF),
    NamedColor::new("violet-100", 0xEDE9FE),
    NamedColor::new("violet-200", 0xDDD6FE),
    NamedColor::new("violet-300", 0xC4B5FD),
    NamedColor::new("violet-400", 0xA78BFA),
    NamedColor::new("violet-500", 0x8B5CF6),
    NamedColor::new("violet-600", 0x7C3AED),
    NamedColor::new("violet-700", 0x6D28D9),
    NamedColor::new("violet-800", 0x5B21B6),
    NamedColor::new("violet-900", 0x4C1D95),
    NamedColor::new("violet-950", 0x2E1065),

    // purple
    NamedColor::new("purple-50", 0xFAF5FF),
    NamedColor::new("purple-100", 0xF3E8FF),
    NamedColor::new("purple-200", 0xE9D5FF),
    NamedColor::new("purple-300", 0xD8B4FE),
    NamedColor::new("purple-400", 0xC084FC),
    NamedColor::new("purple-500", 0xA855F7),
    NamedColor::new("purple-600", 0x9333EA),
    NamedColor::new("purple-700", 0x7E22CE),
    NamedColor::new("purple-800", 0x6B21A8),
    NamedColor::new("purple-900", 0x581C87),
    NamedColor::new("purple-950", 0x3B0764),

    // fuchsia
    NamedColor::new("fuchsia-50", 0xFDF4FF),
    NamedColor::new("fuchsia-100", 0xFAE8FF),
    NamedColor::new("fuchsia-200", 0xF5D0FE),
    NamedColor::new("fuchsia-300", 0xF0ABFC),
    NamedColor::new("fuchsia-400", 0xE879F9),
    NamedColor::new("fuchsia-500", 0xD946EF),
    NamedColor::new("fuchsia-600", 0xC026D3),
    NamedColor::new("fuchsia-700", 0xA21CAF),
    NamedColor::new("fuchsia-800", 0x86198F),
    NamedColor::new("fuchsia-900", 0x701A75),
    NamedColor::new("fuchsia-950", 0x4A044E),

    // pink
    NamedColor::new("pink-50", 0xFDF2F8),
    NamedColor::new("pink-100", 0xFCE7F3),
    NamedColor::new("pink-200", 0xFBCFE8),
    NamedColor::new("pink-300", 0xF9A8D4),
    NamedColor::new("pink-400", 0xF472B6),
    NamedColor::new("pink-500", 0xEC4899),
    NamedColor::new("pink-600", 0xDB2777),
    NamedColor::new("pink-700", 0xBE185D),
    NamedColor::new("pink-800", 0x9D174D),
    NamedColor::new("pink-900", 0x831843),
    NamedColor::new("pink-950", 0x500724),

    // rose
    NamedColor::new("rose-50", 0xFFF1F2),
    NamedColor::new("rose-100", 0xFFE4E6),
    NamedColor::new("rose-200", 0xFECDD3),
    NamedColor::new("rose-300", 0xFDA4AF),
    NamedColor::new("rose-400", 0xFB7185),
    NamedColor::new("rose-500", 0xF43F5E),
    NamedColor::new("rose-600", 0xE11D48),
    NamedColor::new("rose-700", 0xBE123C),
    NamedColor::new("rose-800", 0x9F1239),
    NamedColor::new("rose-900", 0x881337),
    NamedColor::new("rose-950", 0x4C0519),
];
