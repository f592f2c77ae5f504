//! Built-in brand/product knowledge injected into generated prompts.
//!
//! The defaults describe a generic luxury maison so the simulation works out
//! of the box; deployments substitute their own material per section.

/// The three knowledge sections every prompt embeds.
#[derive(Debug, Clone)]
pub struct KnowledgeSources {
    pub brand: String,
    pub product_line: String,
    pub product: String,
}

impl Default for KnowledgeSources {
    fn default() -> Self {
        Self {
            brand: BRAND_KNOWLEDGE.to_owned(),
            product_line: PRODUCT_LINE_KNOWLEDGE.to_owned(),
            product: PRODUCT_KNOWLEDGE.to_owned(),
        }
    }
}

const BRAND_KNOWLEDGE: &str = "\
The maison is a heritage luxury house founded in Florence in 1921, known for
equestrian-inspired hardware, archival monogram canvas, and hand-finished
leather goods. Core brand values: Italian craftsmanship, discreet service,
and lifetime repairability. Every boutique offers complimentary hot-stamping
of initials, a two-year international warranty, and an appointment-based
private client service for purchases above entry price points. The house
positions itself above contemporary-premium competitors and expects sales
associates to emphasize provenance and after-sales care over discounting;
prices are never negotiable in boutique.";

const PRODUCT_LINE_KNOWLEDGE: &str = "\
Current product lines, entry price first:
- Silk and small accessories: scarves, card cases, key charms. Frequent
  gifting choice; most items under the duty-free allowance threshold.
- Leather goods: the flagship line. Shoulder bags, totes, and top-handle
  styles across three sizes each; full-grain and coated-canvas variants.
- Ready-to-wear: seasonal, sized EU 34-54, alterations in 10 business days.
- Timepieces and jewelry: Swiss-made movements, precious-metal pieces kept
  in the back vault and shown on request.
Leather goods drive repeat visits; ready-to-wear anchors VIP relationships.";

const PRODUCT_KNOWLEDGE: &str = "\
Flagship item: the Marquess shoulder bag.
- Sizes: mini (18 cm), small (24 cm), medium (30 cm); the small is the
  best-seller and frequently waitlisted in black.
- Materials: matelasse calfskin or archival canvas with calfskin trim;
  antique gold-tone hardware; suede-lined interior with one zip pocket.
- Price: mini 1,790, small 2,350, medium 2,690 (EUR, tax included).
- Care: avoid rain on suede lining; complimentary cleaning once a year;
  hardware re-plating available through after-sales from year three.
- Common comparisons: customers cross-shop the Marquess small against
  competitor quilted styles at a 10-15% lower price; counter with the
  lifetime repair program and the denser stitch count (11 per inch).";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalogue_is_nonempty() {
        let knowledge = KnowledgeSources::default();
        assert!(!knowledge.brand.is_empty());
        assert!(!knowledge.product_line.is_empty());
        assert!(!knowledge.product.is_empty());
    }
}
