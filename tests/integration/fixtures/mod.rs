// EDI inputs with known expected reports
// WHY: Golden-file testing requires deterministic input/output pairs for validation

/// Single record whose PO uses the explicit `PO-` prefix
pub const SINGLE_PREFIXED: &str = "S5^HDR~\nL11^PO-555^PO~\n";

pub const SINGLE_PREFIXED_EXPECTED: &str = "EDI Problem Record Report
=========================

Record #1
PO Value: PO-555
Record Lines:
  S5^HDR~
  L11^PO-555^PO~

";

/// Shipment with envelope lines ahead of the first stop and a mix of clean,
/// missing, malformed and suspicious PO references
pub const MIXED_SHIPMENT: &str = "ISA^00^          ^00^          ~
GS^SM^SENDER^RECEIVER~
ST^204^0001~
S5^1^CL~
L11^4500012345^PO~
N1^SH^ACME WAREHOUSE~
S5^2^CU~
L11^BOL778^BM~
L11^ORD 7781^PO~
S5^3^CU~
  L11^PO~
N1^CN^RETAIL CO~
S5^4^CU~
L11^SHIP-2024-ABC^PO~
L11^4500099999^PO~
S5^5^CU~
L11^REF#9981^PO~
S5^6^CU~
L11^12345678901234567890X^PO~
SE^19^0001~
";

pub const MIXED_SHIPMENT_EXPECTED: &str = "EDI Problem Record Report
=========================

Record #3
PO Value: ORD 7781
Record Lines:
  S5^2^CU~
  L11^BOL778^BM~
  L11^ORD 7781^PO~

Record #5
PO Value: SHIP-2024-ABC
Record Lines:
  S5^4^CU~
  L11^SHIP-2024-ABC^PO~
  L11^4500099999^PO~

Record #6
PO Value: REF#9981
Record Lines:
  S5^5^CU~
  L11^REF#9981^PO~

Record #7
PO Value: 12345678901234567890X
Record Lines:
  S5^6^CU~
  L11^12345678901234567890X^PO~
  SE^19^0001~

";

/// Records with only clean or absent PO values
pub const CLEAN_SHIPMENT: &str = "S5^1^CL~
L11^4500012345^PO~
S5^2^CU~
L11^2024/07-001^PO~
S5^3^CU~
N1^SH^ACME~
";

pub const CLEAN_EXPECTED: &str = "EDI Problem Record Report
=========================

No problematic records detected.
";
