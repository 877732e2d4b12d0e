use super::*;

fn netarhat() -> &'static TouristSpot {
    &SPOTS[0]
}

#[test]
fn test_parse_describe_known_spot() {
    assert_eq!(
        VoiceCommand::parse("Tell me about Netarhat", SPOTS),
        VoiceCommand::Describe(netarhat())
    );
    assert_eq!(
        VoiceCommand::parse("describe hundru falls", SPOTS),
        VoiceCommand::Describe(&SPOTS[2])
    );
}

#[test]
fn test_parse_describe_unknown_spot() {
    assert_eq!(
        VoiceCommand::parse("tell me about Goa", SPOTS),
        VoiceCommand::DescribeUnknown
    );
}

#[test]
fn test_generic_words_do_not_select_a_spot() {
    assert_eq!(
        VoiceCommand::parse("tell me about tribal dance", SPOTS),
        VoiceCommand::DescribeUnknown
    );
    assert_eq!(
        VoiceCommand::parse("describe betlahem", SPOTS),
        VoiceCommand::DescribeUnknown
    );
    assert_eq!(
        VoiceCommand::parse("tell me about the tribal cultural center", SPOTS),
        VoiceCommand::Describe(&SPOTS[3])
    );
    assert_eq!(
        VoiceCommand::parse("describe the cultural center, please", SPOTS),
        VoiceCommand::Describe(&SPOTS[3])
    );
}

#[test]
fn test_find_spot_whole_words() {
    assert_eq!(find_spot(SPOTS, "what about hundru?"), Some(&SPOTS[2]));
    assert_eq!(find_spot(SPOTS, "netarhat's sunrise"), Some(&SPOTS[0]));
    assert_eq!(find_spot(SPOTS, "hundrufalls"), None);
}

#[test]
fn test_parse_order() {
    assert_eq!(VoiceCommand::parse("next please", SPOTS), VoiceCommand::Next);
    assert_eq!(VoiceCommand::parse("continue", SPOTS), VoiceCommand::Next);
    assert_eq!(VoiceCommand::parse("go back", SPOTS), VoiceCommand::Previous);
    assert_eq!(VoiceCommand::parse("stop and go back", SPOTS), VoiceCommand::Previous);
    assert_eq!(VoiceCommand::parse("pause", SPOTS), VoiceCommand::Stop);
    assert_eq!(VoiceCommand::parse("repeat that", SPOTS), VoiceCommand::Repeat);
    assert_eq!(VoiceCommand::parse("Start Guide", SPOTS), VoiceCommand::StartGuide);
    assert_eq!(VoiceCommand::parse("sing a song", SPOTS), VoiceCommand::Unknown);
}

#[test]
fn test_script_sections() {
    let script = GuideScript::for_spot(netarhat());
    assert!(script
        .section(Section::Introduction)
        .starts_with("Welcome to Netarhat Hill Station, a beautiful hill station in Jharkhand."));
    assert!(script
        .section(Section::Highlights)
        .contains("Sunrise Point, Sunset Point, Tribal Villages"));
    assert!(script
        .section(Section::PracticalInfo)
        .contains("Best time to visit is October to March."));
    assert!(script.section(Section::Conclusion).contains("Netarhat Hill Station"));
}

#[test]
fn test_describe_starts_at_introduction() {
    let mut guide = GuideSession::new(SPOTS);
    let spoken = guide.handle("tell me about betla").unwrap();
    assert!(spoken.starts_with("Welcome to Betla National Park"));
    assert_eq!(guide.selected(), Some(&SPOTS[1]));
    assert_eq!(guide.current_section(), Section::Introduction);
    assert!(guide.is_playing());
}

#[test]
fn test_next_and_previous_wrap() {
    let mut guide = GuideSession::new(SPOTS);
    guide.select(netarhat());

    let spoken = guide.apply(VoiceCommand::Previous).unwrap();
    assert_eq!(guide.current_section(), Section::Conclusion);
    assert!(spoken.starts_with("That concludes"));

    guide.apply(VoiceCommand::Next);
    assert_eq!(guide.current_section(), Section::Introduction);
    guide.apply(VoiceCommand::Next);
    assert_eq!(guide.current_section(), Section::Highlights);
}

#[test]
fn test_repeat_rereads_current() {
    let mut guide = GuideSession::new(SPOTS);
    guide.select(netarhat());
    let first = guide.apply(VoiceCommand::Next).unwrap();
    let again = guide.apply(VoiceCommand::Repeat).unwrap();
    assert_eq!(first, again);
    assert_eq!(guide.current_section(), Section::Highlights);
}

#[test]
fn test_navigation_without_selection_is_noop() {
    let mut guide = GuideSession::new(SPOTS);
    assert_eq!(guide.apply(VoiceCommand::Next), None);
    assert_eq!(guide.apply(VoiceCommand::Previous), None);
    assert_eq!(guide.apply(VoiceCommand::Repeat), None);
    assert_eq!(guide.current_section(), Section::Introduction);
}

#[test]
fn test_start_guide_requires_selection() {
    let mut guide = GuideSession::new(SPOTS);
    assert_eq!(guide.handle("start guide").as_deref(), Some(SELECT_FIRST));

    guide.select(&SPOTS[3]);
    guide.apply(VoiceCommand::Next);
    let spoken = guide.handle("start guide").unwrap();
    assert!(spoken.starts_with("Welcome to Tribal Cultural Center"));
    assert_eq!(guide.current_section(), Section::Introduction);
}

#[test]
fn test_stop_and_unknown() {
    let mut guide = GuideSession::new(SPOTS);
    guide.handle("describe hundru");
    assert!(guide.is_playing());
    assert_eq!(guide.handle("stop"), None);
    assert!(!guide.is_playing());
    assert_eq!(guide.handle("hmm").as_deref(), Some(NOT_UNDERSTOOD));
    assert_eq!(guide.handle("tell me about mars").as_deref(), Some(ASK_WHICH_PLACE));
}
