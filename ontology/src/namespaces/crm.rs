//! CIDOC CRM classes and properties.

terms! {
    "http://www.cidoc-crm.org/cidoc-crm/";
    // Classes
    E13_ATTRIBUTE_ASSIGNMENT = "E13_Attribute_Assignment",
    E17_TYPE_ASSIGNMENT = "E17_Type_Assignment",
    E33_LINGUISTIC_OBJECT = "E33_Linguistic_Object",
    E35_TITLE = "E35_Title",
    E36_VISUAL_ITEM = "E36_Visual_Item",
    E39_ACTOR = "E39_Actor",
    E41_APPELLATION = "E41_Appellation",
    E42_IDENTIFIER = "E42_Identifier",
    E52_TIME_SPAN = "E52_Time-Span",
    E54_DIMENSION = "E54_Dimension",
    E55_TYPE = "E55_Type",
    E65_CREATION = "E65_Creation",
    // Properties
    P1_IS_IDENTIFIED_BY = "P1_is_identified_by",
    P1I_IDENTIFIES = "P1i_identifies",
    P2_HAS_TYPE = "P2_has_type",
    P2I_IS_TYPE_OF = "P2i_is_type_of",
    P4_HAS_TIME_SPAN = "P4_has_time-span",
    P14_CARRIED_OUT_BY = "P14_carried_out_by",
    P14I_PERFORMED = "P14i_performed",
    P16_USED_SPECIFIC_OBJECT = "P16_used_specific_object",
    P41_CLASSIFIED = "P41_classified",
    P42_ASSIGNED = "P42_assigned",
    P49_HAS_FORMER_OR_CURRENT_KEEPER = "P49_has_former_or_current_keeper",
    P67I_IS_REFERRED_TO_BY = "P67i_is_referred_to_by",
    P72_HAS_LANGUAGE = "P72_has_language",
    P81A_END_OF_THE_BEGIN = "P81a_end_of_the_begin",
    P81B_BEGIN_OF_THE_END = "P81b_begin_of_the_end",
    P82_AT_SOME_TIME_WITHIN = "P82_at_some_time_within",
    P90_HAS_VALUE = "P90_has_value",
    P91I_IS_UNIT_OF = "P91i_is_unit_of",
    P94I_WAS_CREATED_BY = "P94i_was_created_by",
    P102_HAS_TITLE = "P102_has_title",
    P102I_IS_TITLE_OF = "P102i_is_title_of",
    P127_HAS_BROADER_TERM = "P127_has_broader_term",
    P137_EXEMPLIFIES = "P137_exemplifies",
    P138_REPRESENTS = "P138_represents",
    P140_ASSIGNED_ATTRIBUTE_TO = "P140_assigned_attribute_to",
    P141_ASSIGNED = "P141_assigned",
    P148_HAS_COMPONENT = "P148_has_component",
    P148I_IS_COMPONENT_OF = "P148i_is_component_of",
    P177_ASSIGNED_PROPERTY_OF_TYPE = "P177_assigned_property_of_type",
    P190_HAS_SYMBOLIC_CONTENT = "P190_has_symbolic_content",
}
