//! Pre-written expert answers.

pub const GREETING: &str =
    "Hello! I'm FloodSense, your assistant for flood information in South Sudan. How can I help you today?";

pub const REGIONAL_ASSESSMENTS: &str = "FLOOD RISK ASSESSMENTS BY REGION:

HIGH RISK REGIONS:
• Bentiu: High flood risk, May-October season, affects ~120,000 people
• Bor: High flood risk, May-October season, affects ~95,000 people  
• Malakal: High flood risk, May-October season, affects ~110,000 people

MEDIUM RISK REGIONS:
• Juba: Medium flood risk, June-September season, affects ~75,000 people
• Tonj: Medium flood risk, June-September season, affects ~45,000 people

LOW RISK REGIONS:
• Yei: Low flood risk, July-September season, affects ~30,000 people
• Wau: Low flood risk, July-August season, affects ~25,000 people

All regions experience seasonal flooding with varying intensity and duration.";

pub const SAFETY_GUIDELINES: &str = "COMPREHENSIVE FLOOD SAFETY GUIDELINES:

PREPARATION:
• Stay informed about weather forecasts and warnings
• Prepare emergency kit with food, water, medicine (3-day supply)
• Know evacuation routes and safe shelter locations
• Keep important documents in waterproof containers
• Identify higher ground locations in your area

DURING FLOODS:
• Move to higher ground immediately when warnings issued
• Never walk, swim, or drive through flood waters
• Stay off bridges over fast-moving water
• Evacuate if told to do so by authorities
• Stay away from downed power lines
• Disconnect electrical appliances if flooding imminent

AFTER FLOODS:
• Return home only when authorities say it's safe
• Check for structural damage before entering buildings
• Avoid contaminated flood water
• Boil water before drinking if water supply affected
• Report damaged utilities to authorities";

pub const CLIMATE_INFORMATION: &str = "CLIMATE AND SEASONAL INFORMATION:

FLOOD SEASONS:
• Main season: May to October (peak: August-September)
• Varies by region: Northern areas start earlier, Southern areas later
• Duration and intensity vary annually

RAINFALL PATTERNS:
• Heavy seasonal rainfall during wet season
• Unpredictable weather patterns due to climate change
• CHIRPS satellite data helps monitor precipitation

CLIMATE CHANGE IMPACTS:
• Increased rainfall intensity and unpredictable patterns
• More frequent extreme weather events
• Changes in seasonal rainfall distribution
• Rising temperatures increase evaporation and precipitation
• Altered White Nile river flow patterns
• Prolonged droughts followed by intense flooding
• Environmental degradation reduces natural flood defenses
• Makes flood prediction more difficult

RIVER SYSTEMS:
• White Nile overflow is major flood cause
• Tributary systems contribute to regional flooding
• Poor drainage infrastructure worsens urban flooding";

pub const JONGLEI: &str = "Jonglei State has a Very High flood risk. The flood season runs from May to November, with severe flooding affecting over 800,000 people annually. The White Nile and Sobat River systems cause extensive seasonal flooding across the state.";

pub const UPPER_NILE: &str = "Upper Nile State has a High flood risk. Seasonal flooding occurs from June to October, affecting approximately 600,000 people. The White Nile and tributaries cause widespread flooding in Malakal, Melut, and surrounding areas.";

pub const UNITY_STATE: &str = "Unity State has a Very High flood risk. Flooding occurs from May to November, affecting over 700,000 people. Bentiu and surrounding areas experience severe seasonal flooding from White Nile overflow.";

pub const EQUATORIA: &str = "Equatoria regions have Medium to Low flood risk. Central Equatoria (including Juba) has medium risk from June-September. Eastern and Western Equatoria have lower risks with localized flooding during heavy rains.";

pub const EVACUATION_CENTERS: &str = "Evacuation centers are typically located at:
1) Schools and community centers on higher ground
2) Government buildings and administrative offices
3) Religious facilities (churches, mosques)
4) UN and NGO compounds when available
5) Designated safe areas identified by local authorities
Contact local authorities or humanitarian organizations for specific locations during flood warnings.";

pub const CLIMATE_CHANGE: &str = "Climate change affects flooding in South Sudan through:
1) Increased rainfall intensity and unpredictable weather patterns
2) More frequent extreme weather events
3) Changes in seasonal rainfall distribution
4) Rising temperatures leading to increased evaporation and precipitation
5) Altered river flow patterns affecting the White Nile system
6) Prolonged droughts followed by intense flooding
7) Environmental degradation reducing natural flood defenses
These changes make flood prediction more difficult and increase vulnerability of communities.";

pub const PREPARATION: &str = "To prepare for floods:
1) Stay informed about weather forecasts and warnings
2) Prepare an emergency kit with food, water, and medicine
3) Know evacuation routes and safe shelter locations
4) Keep important documents in waterproof containers
5) Move to higher ground immediately when warnings are issued
6) Avoid walking or driving through flood waters
7) Disconnect electrical appliances if flooding is imminent";

pub const SAFETY_TIPS: &str = "Flood safety tips:
1) Never walk, swim, or drive through flood waters
2) Stay off bridges over fast-moving water
3) Evacuate if told to do so
4) Move to higher ground or a higher floor
5) Stay away from downed power lines
6) Return home only when authorities say it's safe";

pub const CAUSES: &str = "Floods in South Sudan are primarily caused by:
1) Heavy seasonal rainfall during the wet season (May-October)
2) Overflow of the White Nile and its tributaries
3) Poor drainage infrastructure in urban areas
4) Deforestation and land degradation reducing water absorption
5) Climate change leading to more intense rainfall patterns";

pub const SEASON: &str = "The main flood season in South Sudan typically runs from May to October, with peak flooding usually occurring in August and September. The intensity and duration can vary by region.";
