//! Canned configuration excerpts shaped like the shipped game files.

pub const RULES_INI: &str = "\
[General]
Name=Tiberian Sun

[InfantryTypes]
1=E1
2=E2

[E1]
Name=Light Infantry
UIName=Name:E1
Strength=125
Cost=120
TechLevel=1
Owner=GDI,Nod
Armor=none
Speed=4

[E2]
Name=Disc Thrower
Strength=150
Cost=200
TechLevel=2
Owner=GDI
";

pub const FIRESTORM_INI: &str = "\
[E1]
Cost=100

[CYBORG]
Name=Cyborg
Strength=300
TechLevel=4
Owner=Nod
";

pub const ART_INI: &str = "\
[E1]
Sequence=InfantrySequence
Remapable=yes

[GAPOWR]
Foundation=2x2
Height=3
NewTheater=yes
Remapable=yes
";

pub const ARTFS_INI: &str = "\
[GAPOWR]
Height=4

[GAFSDF]
Foundation=1x1
Voxel=no
";

pub const ART_OVERRIDES_INI: &str = "\
[GAFSDF]
Foundation=2x1

[EDITORONLY]
Image=MARKER
";

pub const EVENTS_INI: &str = "\
[None]
Description=No event.
Available=no

[EnteredBy]
Description=Fires when a unit of the given house enters.
P1Type=House

[Destroyed]
P1Type=Unused
P2Type=Boolean
P2Name=All

[ReachedWaypoint]
IDOverride=40
P1Type=House
P3Type=WaypointZZ
P4Type=Integer
P4PresetOptions=0,1,,2,
";
