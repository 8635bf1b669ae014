//! Text bodies: body properties, paragraphs, runs and their formatting.

mod body;
mod paragraph;
mod run;

pub use body::{
    NormalAutofit, TextAutofit, TextAutofitFlag, TextBody, TextBodyProperties, TextListStyle,
};
pub use paragraph::{
    TextAutonumberBullet, TextBullet, TextBulletColor, TextBulletFollowText, TextBulletSize,
    TextBulletSizePercent, TextBulletSizePoints, TextBulletTypeface, TextCharBullet,
    TextBlipBullet, TextNoBullet, TextParagraph, TextParagraphProperties, TextSpacing,
    TextSpacingPercent, TextSpacingPoints, TextSpacingValue, TextTabStop, TextTabStopList,
};
pub use run::{
    Hyperlink, RegularTextRun, TextCharacterProperties, TextField, TextFont, TextLineBreak,
    TextRun,
};
