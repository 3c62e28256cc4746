//! Widget kind discriminant.

use forge_core::{normalize_type, WidgetNode};

/// Widget kinds with a hand-written generation strategy.
///
/// Anything else is [`WidgetKind::Generic`] and goes through the mapping
/// registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    Scaffold,
    AppBar,
    Container,
    Padding,
    Center,
    SizedBox,
    Align,
    Expanded,
    Flexible,
    Positioned,
    Card,
    Column,
    Row,
    Stack,
    ListView,
    GridView,
    Wrap,
    Text,
    Icon,
    Image,
    Divider,
    ListTile,
    /// Builder button; `buttonType` picks the Material variant.
    Button,
    ElevatedButton,
    TextButton,
    OutlinedButton,
    IconButton,
    TextField,
    Checkbox,
    Switch,
    Radio,
    Slider,
    Generic,
}

/// How a kind places its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    /// No child slot.
    Leaf,
    /// One `child:`.
    Single,
    /// A `children:` list.
    Multi,
    /// Named slots filled by a structural rewrite.
    Slots,
}

impl WidgetKind {
    /// Resolve a type name. Matching ignores case and `_`/`-` separators.
    pub fn from_type(widget_type: &str) -> Self {
        match normalize_type(widget_type).as_str() {
            "scaffold" => WidgetKind::Scaffold,
            "appbar" => WidgetKind::AppBar,
            "container" => WidgetKind::Container,
            "padding" => WidgetKind::Padding,
            "center" => WidgetKind::Center,
            "sizedbox" => WidgetKind::SizedBox,
            "align" => WidgetKind::Align,
            "expanded" => WidgetKind::Expanded,
            "flexible" => WidgetKind::Flexible,
            "positioned" => WidgetKind::Positioned,
            "card" => WidgetKind::Card,
            "column" => WidgetKind::Column,
            "row" => WidgetKind::Row,
            "stack" => WidgetKind::Stack,
            "listview" => WidgetKind::ListView,
            "gridview" => WidgetKind::GridView,
            "wrap" => WidgetKind::Wrap,
            "text" => WidgetKind::Text,
            "icon" => WidgetKind::Icon,
            "image" => WidgetKind::Image,
            "divider" => WidgetKind::Divider,
            "listtile" => WidgetKind::ListTile,
            "button" => WidgetKind::Button,
            "elevatedbutton" => WidgetKind::ElevatedButton,
            "textbutton" => WidgetKind::TextButton,
            "outlinedbutton" => WidgetKind::OutlinedButton,
            "iconbutton" => WidgetKind::IconButton,
            "textfield" => WidgetKind::TextField,
            "checkbox" => WidgetKind::Checkbox,
            "switch" => WidgetKind::Switch,
            "radio" => WidgetKind::Radio,
            "slider" => WidgetKind::Slider,
            _ => WidgetKind::Generic,
        }
    }

    pub fn of(node: &WidgetNode) -> Self {
        Self::from_type(&node.widget_type)
    }

    pub fn cardinality(self) -> Cardinality {
        match self {
            WidgetKind::Scaffold => Cardinality::Slots,
            WidgetKind::Container
            | WidgetKind::Padding
            | WidgetKind::Center
            | WidgetKind::SizedBox
            | WidgetKind::Align
            | WidgetKind::Expanded
            | WidgetKind::Flexible
            | WidgetKind::Positioned
            | WidgetKind::Card
            | WidgetKind::Button
            | WidgetKind::ElevatedButton
            | WidgetKind::TextButton
            | WidgetKind::OutlinedButton => Cardinality::Single,
            WidgetKind::Column
            | WidgetKind::Row
            | WidgetKind::Stack
            | WidgetKind::ListView
            | WidgetKind::GridView
            | WidgetKind::Wrap => Cardinality::Multi,
            WidgetKind::AppBar
            | WidgetKind::Text
            | WidgetKind::Icon
            | WidgetKind::Image
            | WidgetKind::Divider
            | WidgetKind::ListTile
            | WidgetKind::IconButton
            | WidgetKind::TextField
            | WidgetKind::Checkbox
            | WidgetKind::Switch
            | WidgetKind::Radio
            | WidgetKind::Slider => Cardinality::Leaf,
            // Decided by the registry entry, if any.
            WidgetKind::Generic => Cardinality::Multi,
        }
    }

    /// Whether Flutter offers a const constructor for what this kind emits.
    pub fn has_const_constructor(self) -> bool {
        !matches!(
            self,
            WidgetKind::Container
                | WidgetKind::AppBar
                | WidgetKind::ListView
                | WidgetKind::GridView
                | WidgetKind::Image
                | WidgetKind::Checkbox
                | WidgetKind::Switch
                | WidgetKind::Radio
                | WidgetKind::Slider
        )
    }

    pub fn is_named(self) -> bool {
        self != WidgetKind::Generic
    }
}
