//! CRMdig classes used for the tool inventory.

terms! {
    "http://www.ics.forth.gr/isl/CRMdig/";
    D14_SOFTWARE = "D14_Software",
}
