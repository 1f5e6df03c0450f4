//! LRMoo classes and properties.

terms! {
    "http://iflastandards.info/ns/lrm/lrmoo/";
    // Classes
    F1_WORK = "F1_Work",
    F2_EXPRESSION = "F2_Expression",
    F3_MANIFESTATION = "F3_Manifestation",
    F5_ITEM = "F5_Item",
    F11_CORPORATE_BODY = "F11_Corporate_Body",
    F27_WORK_CREATION = "F27_Work_Creation",
    F28_EXPRESSION_CREATION = "F28_Expression_Creation",
    F30_MANIFESTATION_CREATION = "F30_Manifestation_Creation",
    F32_ITEM_PRODUCTION_EVENT = "F32_Item_Production_Event",
    // Properties
    R3_IS_REALISED_IN = "R3_is_realised_in",
    R3I_REALISES = "R3i_realises",
    R4_EMBODIES = "R4_embodies",
    R4I_IS_EMBODIED_IN = "R4i_is_embodied_in",
    R7_EXEMPLIFIES = "R7_exemplifies",
    R16_CREATED = "R16_created",
    R16I_WAS_CREATED_BY = "R16i_was_created_by",
    R17_CREATED = "R17_created",
    R17I_WAS_CREATED_BY = "R17i_was_created_by",
    R19_CREATED_A_REALISATION_OF = "R19_created_a_realisation_of",
    R24_CREATED = "R24_created",
    R24I_WAS_CREATED_THROUGH = "R24i_was_created_through",
    R26_PRODUCED = "R26_produced",
    R27_MATERIALIZED = "R27_materialized",
    R71_HAS_PART = "R71_has_part",
    R71I_IS_PART_OF = "R71i_is_part_of",
}
