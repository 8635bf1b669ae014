//! DrawingML simple types (`ST_*`).
//!
//! Numeric types carry their schema range, string types their anchored
//! pattern; both are enforced by validation. Unions are enums over their
//! member types and parse by trying members in declaration order.

use crate::common::RGBColor;
use crate::common::unit::{Measure, PERCENTAGE_UNITS_PER_PERCENT};
use crate::ooxml::schema::XmlValue;
use crate::{bounded, pattern_type, st_enum, st_union};
use phf::phf_map;

bounded! {
    /// `ST_CoordinateUnqualified`: EMUs within the drawing canvas.
    pub struct CoordinateUnqualified(i64) in [-27_273_042_329_600, 27_273_042_316_900] = 0;
}

bounded! {
    /// `ST_Coordinate32Unqualified`
    pub struct Coordinate32Unqualified(i32) in [i32::MIN, i32::MAX] = 0;
}

bounded! {
    /// `ST_PositiveCoordinate`
    pub struct PositiveCoordinate(i64) in [0, 27_273_042_316_900] = 0;
}

bounded! {
    /// `ST_PositiveCoordinate32`
    pub struct PositiveCoordinate32(i32) in [0, i32::MAX] = 0;
}

bounded! {
    /// `ST_Angle`: 60000ths of a degree.
    pub struct Angle(i32) in [i32::MIN, i32::MAX] = 0;
}

bounded! {
    /// `ST_FixedAngle`: strictly between -90 and 90 degrees.
    pub struct FixedAngle(i32) in [-5_399_999, 5_399_999] = 0;
}

bounded! {
    /// `ST_PositiveFixedAngle`: 0 up to but excluding 360 degrees.
    pub struct PositiveFixedAngle(i32) in [0, 21_599_999] = 0;
}

bounded! {
    /// `ST_PercentageDecimal`: thousandths of a percent.
    pub struct PercentageDecimal(i32) in [i32::MIN, i32::MAX] = 0;
}

bounded! {
    /// `ST_PositivePercentageDecimal`
    pub struct PositivePercentageDecimal(i32) in [0, i32::MAX] = 0;
}

bounded! {
    /// `ST_FixedPercentageDecimal`: -100% to 100%.
    pub struct FixedPercentageDecimal(i32) in [-100_000, 100_000] = 0;
}

bounded! {
    /// `ST_PositiveFixedPercentageDecimal`: 0% to 100%.
    pub struct PositiveFixedPercentageDecimal(i32) in [0, 100_000] = 0;
}

bounded! {
    /// `ST_TextFontSize`: hundredths of a point, 1pt to 4000pt.
    pub struct TextFontSize(i32) in [100, 400_000] = 1_800;
}

bounded! {
    /// `ST_TextNonNegativePoint`
    pub struct TextNonNegativePoint(i32) in [0, 400_000] = 0;
}

bounded! {
    /// `ST_TextPointUnqualified`
    pub struct TextPointUnqualified(i32) in [-400_000, 400_000] = 0;
}

bounded! {
    /// `ST_TextIndentLevelType`
    pub struct TextIndentLevel(i32) in [0, 8] = 0;
}

bounded! {
    /// `ST_TextMargin`: EMUs.
    pub struct TextMargin(i32) in [0, 51_206_400] = 0;
}

bounded! {
    /// `ST_TextIndent`: EMUs.
    pub struct TextIndent(i32) in [-51_206_400, 51_206_400] = 0;
}

bounded! {
    /// `ST_TextBulletStartAtNum`
    pub struct TextBulletStartAt(i32) in [1, 32_767] = 1;
}

bounded! {
    /// `ST_TextBulletSizePercent` in its decimal form: 25% to 400%.
    pub struct TextBulletSizeDecimal(i32) in [25_000, 400_000] = 100_000;
}

bounded! {
    /// `ST_TextSpacingPercent`
    pub struct TextSpacingPercentDecimal(i32) in [0, 13_200_000] = 100_000;
}

bounded! {
    /// `ST_TextSpacingPoint`: hundredths of a point.
    pub struct TextSpacingPoint(i32) in [0, 158_400] = 0;
}

bounded! {
    /// `ST_TextColumnCount`
    pub struct TextColumnCount(i32) in [1, 16] = 1;
}

bounded! {
    /// `ST_LineWidth`: EMUs, up to 1584pt.
    pub struct LineWidth(i32) in [0, 20_116_800] = 0;
}

pattern_type! {
    /// `ST_UniversalMeasure`: a number with a unit suffix.
    pub struct UniversalMeasure(r"^-?[0-9]+(\.[0-9]+)?(mm|cm|in|pt|pc|pi)$") = "0pt";
}

pattern_type! {
    /// `ST_PositiveUniversalMeasure`
    pub struct PositiveUniversalMeasure(r"^[0-9]+(\.[0-9]+)?(mm|cm|in|pt|pc|pi)$") = "0pt";
}

pattern_type! {
    /// `s:ST_Percentage`: a percentage with a `%` suffix.
    pub struct PercentageString(r"^-?[0-9]+(\.[0-9]+)?%$") = "0%";
}

pattern_type! {
    /// `s:ST_PositivePercentage`
    pub struct PositivePercentageString(r"^[0-9]+(\.[0-9]+)?%$") = "0%";
}

pattern_type! {
    /// `s:ST_FixedPercentage`: -100% to 100%.
    pub struct FixedPercentageString(r"^-?((100)|([0-9][0-9]?))(\.[0-9][0-9]?)?%$") = "0%";
}

pattern_type! {
    /// `s:ST_PositiveFixedPercentage`: 0% to 100%.
    pub struct PositiveFixedPercentageString(r"^((100)|([0-9][0-9]?))(\.[0-9][0-9]?)?%$") = "0%";
}

pattern_type! {
    /// `s:ST_Guid`: braced, uppercase hexadecimal.
    pub struct Guid(r"^\{[0-9A-F]{8}-[0-9A-F]{4}-[0-9A-F]{4}-[0-9A-F]{4}-[0-9A-F]{12}\}$") =
        "{00000000-0000-0000-0000-000000000000}";
}

pattern_type! {
    /// `ST_HexColorRGB`: six hexadecimal digits.
    pub struct HexColorRgb(r"^[0-9A-Fa-f]{6}$") = "000000";
}

pattern_type! {
    /// `ST_GeomGuideName`
    pub struct GeomGuideName(r"^\S+$") = "adj";
}

impl Guid {
    /// The all-zero GUID.
    pub fn nil() -> Self {
        Self::default()
    }
}

impl From<RGBColor> for HexColorRgb {
    fn from(color: RGBColor) -> Self {
        Self(color.as_rgb_string())
    }
}

impl UniversalMeasure {
    /// Parsed value, when the text matches the pattern.
    pub fn measure(&self) -> Option<Measure> {
        if !self.is_valid() {
            return None;
        }
        self.0.parse().ok()
    }
}

st_union! {
    /// `ST_Coordinate`
    pub enum Coordinate {
        Unqualified(CoordinateUnqualified),
        Measure(UniversalMeasure),
    }
}

st_union! {
    /// `ST_Coordinate32`
    pub enum Coordinate32 {
        Unqualified(Coordinate32Unqualified),
        Measure(UniversalMeasure),
    }
}

st_union! {
    /// `ST_Percentage`
    pub enum Percentage {
        Decimal(PercentageDecimal),
        Text(PercentageString),
    }
}

st_union! {
    /// `ST_PositivePercentage`
    pub enum PositivePercentage {
        Decimal(PositivePercentageDecimal),
        Text(PositivePercentageString),
    }
}

st_union! {
    /// `ST_FixedPercentage`
    pub enum FixedPercentage {
        Decimal(FixedPercentageDecimal),
        Text(FixedPercentageString),
    }
}

st_union! {
    /// `ST_PositiveFixedPercentage`
    pub enum PositiveFixedPercentage {
        Decimal(PositiveFixedPercentageDecimal),
        Text(PositiveFixedPercentageString),
    }
}

st_union! {
    /// `ST_TextPoint`
    pub enum TextPoint {
        Unqualified(TextPointUnqualified),
        Measure(UniversalMeasure),
    }
}

st_union! {
    /// `ST_TextSpacingPercentOrPercentString`
    pub enum TextSpacingPercentOrString {
        Decimal(TextSpacingPercentDecimal),
        Text(PercentageString),
    }
}

st_union! {
    /// `ST_AdjCoordinate`: a coordinate or the name of a shape guide.
    pub enum AdjCoordinate {
        Coordinate(Coordinate),
        Guide(GeomGuideName),
    }
}

st_union! {
    /// `ST_AdjAngle`: an angle or the name of a shape guide.
    pub enum AdjAngle {
        Angle(Angle),
        Guide(GeomGuideName),
    }
}

impl Coordinate {
    /// A coordinate stored in EMUs.
    #[inline]
    pub fn from_emus(emus: i64) -> Self {
        Self::Unqualified(CoordinateUnqualified(emus))
    }

    /// The value in EMUs; universal measures are converted, truncating.
    pub fn to_emus(&self) -> Option<i64> {
        match self {
            Self::Unqualified(v) => Some(v.0),
            Self::Measure(m) => m.measure().map(|m| m.to_emus()),
        }
    }
}

impl Coordinate32 {
    /// A coordinate stored in EMUs, saturating at the 32-bit range.
    #[inline]
    pub fn from_emus(emus: i64) -> Self {
        Self::Unqualified(Coordinate32Unqualified(saturate_i32(emus)))
    }
}

impl Percentage {
    /// A percentage in thousandths of a percent.
    #[inline]
    pub fn from_thousandths(value: i32) -> Self {
        Self::Decimal(PercentageDecimal(value))
    }

    /// The value in thousandths of a percent.
    pub fn thousandths(&self) -> Option<i64> {
        match self {
            Self::Decimal(v) => Some(v.0 as i64),
            Self::Text(s) => percent_string_thousandths(s.as_str()),
        }
    }
}

impl PositiveFixedPercentage {
    #[inline]
    pub fn from_thousandths(value: i32) -> Self {
        Self::Decimal(PositiveFixedPercentageDecimal(value))
    }
}

impl PositivePercentage {
    #[inline]
    pub fn from_thousandths(value: i32) -> Self {
        Self::Decimal(PositivePercentageDecimal(value))
    }
}

fn percent_string_thousandths(s: &str) -> Option<i64> {
    let number: f64 = s.strip_suffix('%')?.parse().ok()?;
    Some((number * PERCENTAGE_UNITS_PER_PERCENT as f64) as i64)
}

/// Narrow an EMU value to a 32-bit attribute, saturating at the bounds.
#[inline]
pub fn saturate_i32(value: i64) -> i32 {
    value.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

st_enum! {
    /// `ST_ShapeType`: preset geometries.
    pub enum ShapeType {
        Rect = "rect",
        Line = "line",
        LineInv = "lineInv",
        Triangle = "triangle",
        RtTriangle = "rtTriangle",
        Diamond = "diamond",
        Parallelogram = "parallelogram",
        Trapezoid = "trapezoid",
        NonIsoscelesTrapezoid = "nonIsoscelesTrapezoid",
        Pentagon = "pentagon",
        Hexagon = "hexagon",
        Heptagon = "heptagon",
        Octagon = "octagon",
        Decagon = "decagon",
        Dodecagon = "dodecagon",
        Star4 = "star4",
        Star5 = "star5",
        Star6 = "star6",
        Star7 = "star7",
        Star8 = "star8",
        Star10 = "star10",
        Star12 = "star12",
        Star16 = "star16",
        Star24 = "star24",
        Star32 = "star32",
        RoundRect = "roundRect",
        Round1Rect = "round1Rect",
        Round2SameRect = "round2SameRect",
        Round2DiagRect = "round2DiagRect",
        SnipRoundRect = "snipRoundRect",
        Snip1Rect = "snip1Rect",
        Snip2SameRect = "snip2SameRect",
        Snip2DiagRect = "snip2DiagRect",
        Plaque = "plaque",
        Ellipse = "ellipse",
        Teardrop = "teardrop",
        HomePlate = "homePlate",
        Chevron = "chevron",
        PieWedge = "pieWedge",
        Pie = "pie",
        BlockArc = "blockArc",
        Donut = "donut",
        NoSmoking = "noSmoking",
        RightArrow = "rightArrow",
        LeftArrow = "leftArrow",
        UpArrow = "upArrow",
        DownArrow = "downArrow",
        StripedRightArrow = "stripedRightArrow",
        NotchedRightArrow = "notchedRightArrow",
        BentUpArrow = "bentUpArrow",
        LeftRightArrow = "leftRightArrow",
        UpDownArrow = "upDownArrow",
        LeftUpArrow = "leftUpArrow",
        LeftRightUpArrow = "leftRightUpArrow",
        QuadArrow = "quadArrow",
        LeftArrowCallout = "leftArrowCallout",
        RightArrowCallout = "rightArrowCallout",
        UpArrowCallout = "upArrowCallout",
        DownArrowCallout = "downArrowCallout",
        LeftRightArrowCallout = "leftRightArrowCallout",
        UpDownArrowCallout = "upDownArrowCallout",
        QuadArrowCallout = "quadArrowCallout",
        BentArrow = "bentArrow",
        UturnArrow = "uturnArrow",
        CircularArrow = "circularArrow",
        LeftCircularArrow = "leftCircularArrow",
        LeftRightCircularArrow = "leftRightCircularArrow",
        CurvedRightArrow = "curvedRightArrow",
        CurvedLeftArrow = "curvedLeftArrow",
        CurvedUpArrow = "curvedUpArrow",
        CurvedDownArrow = "curvedDownArrow",
        SwooshArrow = "swooshArrow",
        Cube = "cube",
        Can = "can",
        LightningBolt = "lightningBolt",
        Heart = "heart",
        Sun = "sun",
        Moon = "moon",
        SmileyFace = "smileyFace",
        IrregularSeal1 = "irregularSeal1",
        IrregularSeal2 = "irregularSeal2",
        FoldedCorner = "foldedCorner",
        Bevel = "bevel",
        Frame = "frame",
        HalfFrame = "halfFrame",
        Corner = "corner",
        DiagStripe = "diagStripe",
        Chord = "chord",
        Arc = "arc",
        LeftBracket = "leftBracket",
        RightBracket = "rightBracket",
        LeftBrace = "leftBrace",
        RightBrace = "rightBrace",
        BracketPair = "bracketPair",
        BracePair = "bracePair",
        StraightConnector1 = "straightConnector1",
        BentConnector2 = "bentConnector2",
        BentConnector3 = "bentConnector3",
        BentConnector4 = "bentConnector4",
        BentConnector5 = "bentConnector5",
        CurvedConnector2 = "curvedConnector2",
        CurvedConnector3 = "curvedConnector3",
        CurvedConnector4 = "curvedConnector4",
        CurvedConnector5 = "curvedConnector5",
        Callout1 = "callout1",
        Callout2 = "callout2",
        Callout3 = "callout3",
        AccentCallout1 = "accentCallout1",
        AccentCallout2 = "accentCallout2",
        AccentCallout3 = "accentCallout3",
        BorderCallout1 = "borderCallout1",
        BorderCallout2 = "borderCallout2",
        BorderCallout3 = "borderCallout3",
        AccentBorderCallout1 = "accentBorderCallout1",
        AccentBorderCallout2 = "accentBorderCallout2",
        AccentBorderCallout3 = "accentBorderCallout3",
        WedgeRectCallout = "wedgeRectCallout",
        WedgeRoundRectCallout = "wedgeRoundRectCallout",
        WedgeEllipseCallout = "wedgeEllipseCallout",
        CloudCallout = "cloudCallout",
        Cloud = "cloud",
        Ribbon = "ribbon",
        Ribbon2 = "ribbon2",
        EllipseRibbon = "ellipseRibbon",
        EllipseRibbon2 = "ellipseRibbon2",
        LeftRightRibbon = "leftRightRibbon",
        VerticalScroll = "verticalScroll",
        HorizontalScroll = "horizontalScroll",
        Wave = "wave",
        DoubleWave = "doubleWave",
        Plus = "plus",
        FlowChartProcess = "flowChartProcess",
        FlowChartDecision = "flowChartDecision",
        FlowChartInputOutput = "flowChartInputOutput",
        FlowChartPredefinedProcess = "flowChartPredefinedProcess",
        FlowChartInternalStorage = "flowChartInternalStorage",
        FlowChartDocument = "flowChartDocument",
        FlowChartMultidocument = "flowChartMultidocument",
        FlowChartTerminator = "flowChartTerminator",
        FlowChartPreparation = "flowChartPreparation",
        FlowChartManualInput = "flowChartManualInput",
        FlowChartManualOperation = "flowChartManualOperation",
        FlowChartConnector = "flowChartConnector",
        FlowChartPunchedCard = "flowChartPunchedCard",
        FlowChartPunchedTape = "flowChartPunchedTape",
        FlowChartSummingJunction = "flowChartSummingJunction",
        FlowChartOr = "flowChartOr",
        FlowChartCollate = "flowChartCollate",
        FlowChartSort = "flowChartSort",
        FlowChartExtract = "flowChartExtract",
        FlowChartMerge = "flowChartMerge",
        FlowChartOfflineStorage = "flowChartOfflineStorage",
        FlowChartOnlineStorage = "flowChartOnlineStorage",
        FlowChartMagneticTape = "flowChartMagneticTape",
        FlowChartMagneticDisk = "flowChartMagneticDisk",
        FlowChartMagneticDrum = "flowChartMagneticDrum",
        FlowChartDisplay = "flowChartDisplay",
        FlowChartDelay = "flowChartDelay",
        FlowChartAlternateProcess = "flowChartAlternateProcess",
        FlowChartOffpageConnector = "flowChartOffpageConnector",
        ActionButtonBlank = "actionButtonBlank",
        ActionButtonHome = "actionButtonHome",
        ActionButtonHelp = "actionButtonHelp",
        ActionButtonInformation = "actionButtonInformation",
        ActionButtonForwardNext = "actionButtonForwardNext",
        ActionButtonBackPrevious = "actionButtonBackPrevious",
        ActionButtonEnd = "actionButtonEnd",
        ActionButtonBeginning = "actionButtonBeginning",
        ActionButtonReturn = "actionButtonReturn",
        ActionButtonDocument = "actionButtonDocument",
        ActionButtonSound = "actionButtonSound",
        ActionButtonMovie = "actionButtonMovie",
        Gear6 = "gear6",
        Gear9 = "gear9",
        Funnel = "funnel",
        MathPlus = "mathPlus",
        MathMinus = "mathMinus",
        MathMultiply = "mathMultiply",
        MathDivide = "mathDivide",
        MathEqual = "mathEqual",
        MathNotEqual = "mathNotEqual",
        CornerTabs = "cornerTabs",
        SquareTabs = "squareTabs",
        PlaqueTabs = "plaqueTabs",
        ChartX = "chartX",
        ChartStar = "chartStar",
        ChartPlus = "chartPlus",
    }
}

st_enum! {
    /// `ST_SchemeColorVal`
    pub enum SchemeColorValue {
        Background1 = "bg1",
        Text1 = "tx1",
        Background2 = "bg2",
        Text2 = "tx2",
        Accent1 = "accent1",
        Accent2 = "accent2",
        Accent3 = "accent3",
        Accent4 = "accent4",
        Accent5 = "accent5",
        Accent6 = "accent6",
        Hyperlink = "hlink",
        FollowedHyperlink = "folHlink",
        PlaceholderColor = "phClr",
        Dark1 = "dk1",
        Light1 = "lt1",
        Dark2 = "dk2",
        Light2 = "lt2",
    }
}

st_enum! {
    /// `ST_SystemColorVal`
    pub enum SystemColorValue {
        WindowText = "windowText",
        Window = "window",
        ScrollBar = "scrollBar",
        Background = "background",
        ActiveCaption = "activeCaption",
        InactiveCaption = "inactiveCaption",
        Menu = "menu",
        WindowFrame = "windowFrame",
        MenuText = "menuText",
        CaptionText = "captionText",
        ActiveBorder = "activeBorder",
        InactiveBorder = "inactiveBorder",
        AppWorkspace = "appWorkspace",
        Highlight = "highlight",
        HighlightText = "highlightText",
        BtnFace = "btnFace",
        BtnShadow = "btnShadow",
        GrayText = "grayText",
        BtnText = "btnText",
        InactiveCaptionText = "inactiveCaptionText",
        BtnHighlight = "btnHighlight",
        ThreeDDkShadow = "3dDkShadow",
        ThreeDLight = "3dLight",
        InfoText = "infoText",
        InfoBk = "infoBk",
        HotLight = "hotLight",
        GradientActiveCaption = "gradientActiveCaption",
        GradientInactiveCaption = "gradientInactiveCaption",
        MenuHighlight = "menuHighlight",
        MenuBar = "menuBar",
    }
}

st_enum! {
    /// `ST_LineCap`
    pub enum LineCap {
        Round = "rnd",
        Square = "sq",
        Flat = "flat",
    }
}

st_enum! {
    /// `ST_CompoundLine`
    pub enum CompoundLine {
        Single = "sng",
        Double = "dbl",
        ThickThin = "thickThin",
        ThinThick = "thinThick",
        Triple = "tri",
    }
}

st_enum! {
    /// `ST_PenAlignment`
    pub enum PenAlignment {
        Center = "ctr",
        Inset = "in",
    }
}

st_enum! {
    /// `ST_PresetLineDashVal`
    pub enum PresetLineDashValue {
        Solid = "solid",
        Dot = "dot",
        Dash = "dash",
        LargeDash = "lgDash",
        DashDot = "dashDot",
        LargeDashDot = "lgDashDot",
        LargeDashDotDot = "lgDashDotDot",
        SystemDash = "sysDash",
        SystemDot = "sysDot",
        SystemDashDot = "sysDashDot",
        SystemDashDotDot = "sysDashDotDot",
    }
}

st_enum! {
    /// `ST_LineEndType`
    pub enum LineEndType {
        None = "none",
        Triangle = "triangle",
        Stealth = "stealth",
        Diamond = "diamond",
        Oval = "oval",
        Arrow = "arrow",
    }
}

st_enum! {
    /// `ST_LineEndWidth`
    pub enum LineEndWidth {
        Small = "sm",
        Medium = "med",
        Large = "lg",
    }
}

st_enum! {
    /// `ST_LineEndLength`
    pub enum LineEndLength {
        Small = "sm",
        Medium = "med",
        Large = "lg",
    }
}

st_enum! {
    /// `ST_TextAlignType`
    pub enum TextAlignType {
        Left = "l",
        Center = "ctr",
        Right = "r",
        Justified = "just",
        JustifiedLow = "justLow",
        Distributed = "dist",
        ThaiDistributed = "thaiDist",
    }
}

st_enum! {
    /// `ST_TextFontAlignType`
    pub enum TextFontAlignType {
        Auto = "auto",
        Top = "t",
        Center = "ctr",
        Baseline = "base",
        Bottom = "b",
    }
}

st_enum! {
    /// `ST_TextAutonumberScheme`
    pub enum TextAutonumberScheme {
        ArabicPeriod = "arabicPeriod",
        AlphaLcParenBoth = "alphaLcParenBoth",
        AlphaUcParenBoth = "alphaUcParenBoth",
        AlphaLcParenR = "alphaLcParenR",
        AlphaUcParenR = "alphaUcParenR",
        AlphaLcPeriod = "alphaLcPeriod",
        AlphaUcPeriod = "alphaUcPeriod",
        ArabicParenBoth = "arabicParenBoth",
        ArabicParenR = "arabicParenR",
        ArabicPlain = "arabicPlain",
        RomanLcParenBoth = "romanLcParenBoth",
        RomanUcParenBoth = "romanUcParenBoth",
        RomanLcParenR = "romanLcParenR",
        RomanUcParenR = "romanUcParenR",
        RomanLcPeriod = "romanLcPeriod",
        RomanUcPeriod = "romanUcPeriod",
        CircleNumDbPlain = "circleNumDbPlain",
        CircleNumWdBlackPlain = "circleNumWdBlackPlain",
        CircleNumWdWhitePlain = "circleNumWdWhitePlain",
        ArabicDbPeriod = "arabicDbPeriod",
        ArabicDbPlain = "arabicDbPlain",
        Ea1ChsPeriod = "ea1ChsPeriod",
        Ea1ChsPlain = "ea1ChsPlain",
        Ea1ChtPeriod = "ea1ChtPeriod",
        Ea1ChtPlain = "ea1ChtPlain",
        Ea1JpnChsDbPeriod = "ea1JpnChsDbPeriod",
        Ea1JpnKorPlain = "ea1JpnKorPlain",
        Ea1JpnKorPeriod = "ea1JpnKorPeriod",
        Arabic1Minus = "arabic1Minus",
        Arabic2Minus = "arabic2Minus",
        Hebrew2Minus = "hebrew2Minus",
        ThaiAlphaPeriod = "thaiAlphaPeriod",
        ThaiAlphaParenR = "thaiAlphaParenR",
        ThaiAlphaParenBoth = "thaiAlphaParenBoth",
        ThaiNumPeriod = "thaiNumPeriod",
        ThaiNumParenR = "thaiNumParenR",
        ThaiNumParenBoth = "thaiNumParenBoth",
        HindiAlphaPeriod = "hindiAlphaPeriod",
        HindiNumPeriod = "hindiNumPeriod",
        HindiNumParenR = "hindiNumParenR",
        HindiAlpha1Period = "hindiAlpha1Period",
    }
}

st_enum! {
    /// `ST_TextUnderlineType`
    pub enum TextUnderlineType {
        None = "none",
        Words = "words",
        Single = "sng",
        Double = "dbl",
        Heavy = "heavy",
        Dotted = "dotted",
        DottedHeavy = "dottedHeavy",
        Dash = "dash",
        DashHeavy = "dashHeavy",
        DashLong = "dashLong",
        DashLongHeavy = "dashLongHeavy",
        DotDash = "dotDash",
        DotDashHeavy = "dotDashHeavy",
        DotDotDash = "dotDotDash",
        DotDotDashHeavy = "dotDotDashHeavy",
        Wavy = "wavy",
        WavyHeavy = "wavyHeavy",
        WavyDouble = "wavyDbl",
    }
}

st_enum! {
    /// `ST_TextStrikeType`
    pub enum TextStrikeType {
        NoStrike = "noStrike",
        Single = "sngStrike",
        Double = "dblStrike",
    }
}

st_enum! {
    /// `ST_TextCapsType`
    pub enum TextCapsType {
        None = "none",
        Small = "small",
        All = "all",
    }
}

st_enum! {
    /// `ST_TextAnchoringType`
    pub enum TextAnchoringType {
        Top = "t",
        Center = "ctr",
        Bottom = "b",
        Justified = "just",
        Distributed = "dist",
    }
}

st_enum! {
    /// `ST_TextWrappingType`
    pub enum TextWrappingType {
        None = "none",
        Square = "square",
    }
}

st_enum! {
    /// `ST_TextVertOverflowType`
    pub enum TextVertOverflowType {
        Overflow = "overflow",
        Ellipsis = "ellipsis",
        Clip = "clip",
    }
}

st_enum! {
    /// `ST_TextHorzOverflowType`
    pub enum TextHorzOverflowType {
        Overflow = "overflow",
        Clip = "clip",
    }
}

st_enum! {
    /// `ST_TextVerticalType`
    pub enum TextVerticalType {
        Horizontal = "horz",
        Vertical = "vert",
        Vertical270 = "vert270",
        WordArtVertical = "wordArtVert",
        EastAsianVertical = "eaVert",
        MongolianVertical = "mongolianVert",
        WordArtVerticalRtl = "wordArtVertRtl",
    }
}

st_enum! {
    /// `ST_TextTabAlignType`
    pub enum TextTabAlignType {
        Left = "l",
        Center = "ctr",
        Right = "r",
        Decimal = "dec",
    }
}

st_enum! {
    /// `ST_BlackWhiteMode`
    pub enum BlackWhiteMode {
        Color = "clr",
        Auto = "auto",
        Gray = "gray",
        LightGray = "ltGray",
        InverseGray = "invGray",
        GrayWhite = "grayWhite",
        BlackGray = "blackGray",
        BlackWhite = "blackWhite",
        Black = "black",
        White = "white",
        Hidden = "hidden",
    }
}

st_enum! {
    /// `ST_BlipCompression`
    pub enum BlipCompression {
        None = "none",
        Email = "email",
        Screen = "screen",
        Print = "print",
        HighQualityPrint = "hqprint",
    }
}

st_enum! {
    /// `ST_PresetPatternVal`
    pub enum PresetPatternValue {
        Pct5 = "pct5",
        Pct10 = "pct10",
        Pct20 = "pct20",
        Pct25 = "pct25",
        Pct30 = "pct30",
        Pct40 = "pct40",
        Pct50 = "pct50",
        Pct60 = "pct60",
        Pct70 = "pct70",
        Pct75 = "pct75",
        Pct80 = "pct80",
        Pct90 = "pct90",
        Horz = "horz",
        Vert = "vert",
        LtHorz = "ltHorz",
        LtVert = "ltVert",
        DkHorz = "dkHorz",
        DkVert = "dkVert",
        NarHorz = "narHorz",
        NarVert = "narVert",
        DashHorz = "dashHorz",
        DashVert = "dashVert",
        Cross = "cross",
        DnDiag = "dnDiag",
        UpDiag = "upDiag",
        LtDnDiag = "ltDnDiag",
        LtUpDiag = "ltUpDiag",
        DkDnDiag = "dkDnDiag",
        DkUpDiag = "dkUpDiag",
        WdDnDiag = "wdDnDiag",
        WdUpDiag = "wdUpDiag",
        DashDnDiag = "dashDnDiag",
        DashUpDiag = "dashUpDiag",
        DiagCross = "diagCross",
        SmCheck = "smCheck",
        LgCheck = "lgCheck",
        SmGrid = "smGrid",
        LgGrid = "lgGrid",
        DotGrid = "dotGrid",
        SmConfetti = "smConfetti",
        LgConfetti = "lgConfetti",
        HorzBrick = "horzBrick",
        DiagBrick = "diagBrick",
        SolidDmnd = "solidDmnd",
        OpenDmnd = "openDmnd",
        DotDmnd = "dotDmnd",
        Plaid = "plaid",
        Sphere = "sphere",
        Weave = "weave",
        Divot = "divot",
        Shingle = "shingle",
        Wave = "wave",
        Trellis = "trellis",
        ZigZag = "zigZag",
    }
}

st_enum! {
    /// `ST_PathShadeType`
    pub enum PathShadeType {
        Shape = "shape",
        Circle = "circle",
        Rect = "rect",
    }
}

st_enum! {
    /// `ST_TileFlipMode`
    pub enum TileFlipMode {
        None = "none",
        X = "x",
        Y = "y",
        XY = "xy",
    }
}

st_enum! {
    /// `ST_RectAlignment`
    pub enum RectAlignment {
        TopLeft = "tl",
        Top = "t",
        TopRight = "tr",
        Left = "l",
        Center = "ctr",
        Right = "r",
        BottomLeft = "bl",
        Bottom = "b",
        BottomRight = "br",
    }
}

st_enum! {
    /// `ST_PathFillMode`
    pub enum PathFillMode {
        Norm = "norm",
        None = "none",
        Lighten = "lighten",
        LightenLess = "lightenLess",
        Darken = "darken",
        DarkenLess = "darkenLess",
    }
}

static PRESET_COLORS: phf::Map<&'static str, (u8, u8, u8)> = phf_map! {
    "aliceBlue" => (240, 248, 255),
    "antiqueWhite" => (250, 235, 215),
    "aqua" => (0, 255, 255),
    "aquamarine" => (127, 255, 212),
    "azure" => (240, 255, 255),
    "beige" => (245, 245, 220),
    "bisque" => (255, 228, 196),
    "black" => (0, 0, 0),
    "blanchedAlmond" => (255, 235, 205),
    "blue" => (0, 0, 255),
    "blueViolet" => (138, 43, 226),
    "brown" => (165, 42, 42),
    "burlyWood" => (222, 184, 135),
    "cadetBlue" => (95, 158, 160),
    "chartreuse" => (127, 255, 0),
    "chocolate" => (210, 105, 30),
    "coral" => (255, 127, 80),
    "cornflowerBlue" => (100, 149, 237),
    "cornsilk" => (255, 248, 220),
    "crimson" => (220, 20, 60),
    "cyan" => (0, 255, 255),
    "darkBlue" => (0, 0, 139),
    "darkCyan" => (0, 139, 139),
    "darkGoldenrod" => (184, 134, 11),
    "darkGray" => (169, 169, 169),
    "darkGreen" => (0, 100, 0),
    "darkGrey" => (169, 169, 169),
    "darkKhaki" => (189, 183, 107),
    "darkMagenta" => (139, 0, 139),
    "darkOliveGreen" => (85, 107, 47),
    "darkOrange" => (255, 140, 0),
    "darkOrchid" => (153, 50, 204),
    "darkRed" => (139, 0, 0),
    "darkSalmon" => (233, 150, 122),
    "darkSeaGreen" => (143, 188, 143),
    "darkSlateBlue" => (72, 61, 139),
    "darkSlateGray" => (47, 79, 79),
    "darkSlateGrey" => (47, 79, 79),
    "darkTurquoise" => (0, 206, 209),
    "darkViolet" => (148, 0, 211),
    "deepPink" => (255, 20, 147),
    "deepSkyBlue" => (0, 191, 255),
    "dimGray" => (105, 105, 105),
    "dimGrey" => (105, 105, 105),
    "dkBlue" => (0, 0, 139),
    "dkCyan" => (0, 139, 139),
    "dkGoldenrod" => (184, 134, 11),
    "dkGray" => (169, 169, 169),
    "dkGreen" => (0, 100, 0),
    "dkGrey" => (169, 169, 169),
    "dkKhaki" => (189, 183, 107),
    "dkMagenta" => (139, 0, 139),
    "dkOliveGreen" => (85, 107, 47),
    "dkOrange" => (255, 140, 0),
    "dkOrchid" => (153, 50, 204),
    "dkRed" => (139, 0, 0),
    "dkSalmon" => (233, 150, 122),
    "dkSeaGreen" => (143, 188, 143),
    "dkSlateBlue" => (72, 61, 139),
    "dkSlateGray" => (47, 79, 79),
    "dkSlateGrey" => (47, 79, 79),
    "dkTurquoise" => (0, 206, 209),
    "dkViolet" => (148, 0, 211),
    "dodgerBlue" => (30, 144, 255),
    "firebrick" => (178, 34, 34),
    "floralWhite" => (255, 250, 240),
    "forestGreen" => (34, 139, 34),
    "fuchsia" => (255, 0, 255),
    "gainsboro" => (220, 220, 220),
    "ghostWhite" => (248, 248, 255),
    "gold" => (255, 215, 0),
    "goldenrod" => (218, 165, 32),
    "gray" => (128, 128, 128),
    "green" => (0, 128, 0),
    "greenYellow" => (173, 255, 47),
    "grey" => (128, 128, 128),
    "honeydew" => (240, 255, 240),
    "hotPink" => (255, 105, 180),
    "indianRed" => (205, 92, 92),
    "indigo" => (75, 0, 130),
    "ivory" => (255, 255, 240),
    "khaki" => (240, 230, 140),
    "lavender" => (230, 230, 250),
    "lavenderBlush" => (255, 240, 245),
    "lawnGreen" => (124, 252, 0),
    "lemonChiffon" => (255, 250, 205),
    "lightBlue" => (173, 216, 230),
    "lightCoral" => (240, 128, 128),
    "lightCyan" => (224, 255, 255),
    "lightGoldenrodYellow" => (250, 250, 210),
    "lightGray" => (211, 211, 211),
    "lightGreen" => (144, 238, 144),
    "lightGrey" => (211, 211, 211),
    "lightPink" => (255, 182, 193),
    "lightSalmon" => (255, 160, 122),
    "lightSeaGreen" => (32, 178, 170),
    "lightSkyBlue" => (135, 206, 250),
    "lightSlateGray" => (119, 136, 153),
    "lightSlateGrey" => (119, 136, 153),
    "lightSteelBlue" => (176, 196, 222),
    "lightYellow" => (255, 255, 224),
    "lime" => (0, 255, 0),
    "limeGreen" => (50, 205, 50),
    "linen" => (250, 240, 230),
    "ltBlue" => (173, 216, 230),
    "ltCoral" => (240, 128, 128),
    "ltCyan" => (224, 255, 255),
    "ltGoldenrodYellow" => (250, 250, 210),
    "ltGray" => (211, 211, 211),
    "ltGreen" => (144, 238, 144),
    "ltGrey" => (211, 211, 211),
    "ltPink" => (255, 182, 193),
    "ltSalmon" => (255, 160, 122),
    "ltSeaGreen" => (32, 178, 170),
    "ltSkyBlue" => (135, 206, 250),
    "ltSlateGray" => (119, 136, 153),
    "ltSlateGrey" => (119, 136, 153),
    "ltSteelBlue" => (176, 196, 222),
    "ltYellow" => (255, 255, 224),
    "magenta" => (255, 0, 255),
    "maroon" => (128, 0, 0),
    "medAquamarine" => (102, 205, 170),
    "medBlue" => (0, 0, 205),
    "medOrchid" => (186, 85, 211),
    "medPurple" => (147, 112, 219),
    "medSeaGreen" => (60, 179, 113),
    "medSlateBlue" => (123, 104, 238),
    "medSpringGreen" => (0, 250, 154),
    "medTurquoise" => (72, 209, 204),
    "medVioletRed" => (199, 21, 133),
    "mediumAquamarine" => (102, 205, 170),
    "mediumBlue" => (0, 0, 205),
    "mediumOrchid" => (186, 85, 211),
    "mediumPurple" => (147, 112, 219),
    "mediumSeaGreen" => (60, 179, 113),
    "mediumSlateBlue" => (123, 104, 238),
    "mediumSpringGreen" => (0, 250, 154),
    "mediumTurquoise" => (72, 209, 204),
    "mediumVioletRed" => (199, 21, 133),
    "midnightBlue" => (25, 25, 112),
    "mintCream" => (245, 255, 250),
    "mistyRose" => (255, 228, 225),
    "moccasin" => (255, 228, 181),
    "navajoWhite" => (255, 222, 173),
    "navy" => (0, 0, 128),
    "oldLace" => (253, 245, 230),
    "olive" => (128, 128, 0),
    "oliveDrab" => (107, 142, 35),
    "orange" => (255, 165, 0),
    "orangeRed" => (255, 69, 0),
    "orchid" => (218, 112, 214),
    "paleGoldenrod" => (238, 232, 170),
    "paleGreen" => (152, 251, 152),
    "paleTurquoise" => (175, 238, 238),
    "paleVioletRed" => (219, 112, 147),
    "papayaWhip" => (255, 239, 213),
    "peachPuff" => (255, 218, 185),
    "peru" => (205, 133, 63),
    "pink" => (255, 192, 203),
    "plum" => (221, 160, 221),
    "powderBlue" => (176, 224, 230),
    "purple" => (128, 0, 128),
    "red" => (255, 0, 0),
    "rosyBrown" => (188, 143, 143),
    "royalBlue" => (65, 105, 225),
    "saddleBrown" => (139, 69, 19),
    "salmon" => (250, 128, 114),
    "sandyBrown" => (244, 164, 96),
    "seaGreen" => (46, 139, 87),
    "seaShell" => (255, 245, 238),
    "sienna" => (160, 82, 45),
    "silver" => (192, 192, 192),
    "skyBlue" => (135, 206, 235),
    "slateBlue" => (106, 90, 205),
    "slateGray" => (112, 128, 144),
    "slateGrey" => (112, 128, 144),
    "snow" => (255, 250, 250),
    "springGreen" => (0, 255, 127),
    "steelBlue" => (70, 130, 180),
    "tan" => (210, 180, 140),
    "teal" => (0, 128, 128),
    "thistle" => (216, 191, 216),
    "tomato" => (255, 99, 71),
    "turquoise" => (64, 224, 208),
    "violet" => (238, 130, 238),
    "wheat" => (245, 222, 179),
    "white" => (255, 255, 255),
    "whiteSmoke" => (245, 245, 245),
    "yellow" => (255, 255, 0),
    "yellowGreen" => (154, 205, 50),
};

/// `ST_PresetColorVal`: a named color.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PresetColorValue(pub String);

impl PresetColorValue {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The sRGB value of the named color.
    pub fn rgb(&self) -> Option<RGBColor> {
        PRESET_COLORS
            .get(self.0.as_str())
            .map(|&(r, g, b)| RGBColor::new(r, g, b))
    }
}

impl Default for PresetColorValue {
    fn default() -> Self {
        Self::new("black")
    }
}

impl XmlValue for PresetColorValue {
    fn to_xml_value(&self) -> String {
        self.0.clone()
    }

    fn parse_value(s: &str) -> Result<Self, String> {
        Ok(Self::new(s))
    }

    fn check(&self) -> Result<(), String> {
        if PRESET_COLORS.contains_key(self.0.as_str()) {
            Ok(())
        } else {
            Err(format!("'{}' is not a preset color", self.0))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_coordinate_members() {
        assert_eq!(
            Coordinate::parse_value("914400"),
            Ok(Coordinate::from_emus(914_400))
        );
        let measure = Coordinate::parse_value("2.5cm").unwrap();
        assert_eq!(measure.member_name(), "Measure");
        assert_eq!(measure.to_emus(), Some(900_000));
        assert_eq!(measure.to_string(), "2.5cm");
    }

    #[test]
    fn test_union_error_names_member() {
        let c = Coordinate::Unqualified(CoordinateUnqualified(30_000_000_000_000));
        let err = c.check().unwrap_err();
        assert!(err.starts_with("Unqualified:"), "{}", err);

        let bad = Coordinate::parse_value("12px").unwrap();
        assert_eq!(bad.member_name(), "Measure");
        assert!(bad.check().unwrap_err().starts_with("Measure:"));
    }

    #[test]
    fn test_percentage_forms() {
        let p = Percentage::parse_value("50%").unwrap();
        assert_eq!(p, Percentage::Text(PercentageString::new("50%")));
        assert_eq!(p.thousandths(), Some(50_000));
        assert_eq!(Percentage::parse_value("-25000").unwrap().thousandths(), Some(-25_000));

        assert!(PositiveFixedPercentage::parse_value("100%").unwrap().check().is_ok());
        assert!(PositiveFixedPercentage::parse_value("101%").unwrap().check().is_err());
        assert!(PositiveFixedPercentage::parse_value("100001").unwrap().check().is_err());
    }

    #[test]
    fn test_adj_coordinate_prefers_guide_names() {
        assert_eq!(
            AdjCoordinate::parse_value("adj1").unwrap(),
            AdjCoordinate::Guide(GeomGuideName::new("adj1"))
        );
        assert_eq!(
            AdjCoordinate::parse_value("100").unwrap(),
            AdjCoordinate::Coordinate(Coordinate::from_emus(100))
        );
    }

    #[test]
    fn test_guid_pattern() {
        assert!(Guid::new("{12345678-1234-1234-1234-123456789012}").check().is_ok());
        assert!(Guid::new("{5C22544A-7EE6-4342-B048-85BDC9FD1C3A}").check().is_ok());
        assert!(Guid::new("not-a-guid").check().is_err());
        assert!(Guid::new("{5c22544a-7ee6-4342-b048-85bdc9fd1c3a}").check().is_err());
        assert!(Guid::nil().check().is_ok());
    }

    #[test]
    fn test_enum_values() {
        assert_eq!(ShapeType::default(), ShapeType::Rect);
        assert_eq!(ShapeType::parse_value("flowChartDecision"), Ok(ShapeType::FlowChartDecision));
        assert_eq!(SystemColorValue::ThreeDLight.as_str(), "3dLight");
        assert!(LineCap::parse_value("round").is_err());
    }

    #[test]
    fn test_preset_colors() {
        let c = PresetColorValue::new("cornflowerBlue");
        assert!(c.check().is_ok());
        assert_eq!(c.rgb(), Some(RGBColor::new(100, 149, 237)));
        assert_eq!(PresetColorValue::new("dkSlateGray").rgb(), Some(RGBColor::new(47, 79, 79)));
        assert!(PresetColorValue::new("notAColor").check().is_err());
    }

    #[test]
    fn test_saturate_i32() {
        assert_eq!(saturate_i32(i64::MAX), i32::MAX);
        assert_eq!(saturate_i32(-5), -5);
    }

    proptest! {
        #[test]
        fn coordinate_integers_parse_unqualified(v in -27_273_042_329_600i64..=27_273_042_316_900) {
            let c = Coordinate::parse_value(&v.to_string()).unwrap();
            prop_assert_eq!(c.to_emus(), Some(v));
            prop_assert!(c.check().is_ok());
        }

        #[test]
        fn universal_measures_round_trip(n in 0u32..100_000, unit in prop::sample::select(vec!["mm", "cm", "in", "pt", "pc", "pi"])) {
            let text = format!("{}{}", n, unit);
            let c = Coordinate::parse_value(&text).unwrap();
            prop_assert_eq!(c.member_name(), "Measure");
            prop_assert_eq!(c.to_xml_value(), text);
        }
    }
}
