use crate::server::model::activity::Activity;

/// Activities available when the server starts, in display order.
pub fn activities() -> Vec<Activity> {
    vec![
        Activity::new(
            "Chess Club",
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            &["michael@mergington.edu", "daniel@mergington.edu"],
        ),
        Activity::new(
            "Programming Class",
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
            &["emma@mergington.edu", "sophia@mergington.edu"],
        ),
        Activity::new(
            "Gym Class",
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
            &["john@mergington.edu", "olivia@mergington.edu"],
        ),
        Activity::new(
            "Soccer Team",
            "Practice skills, teamwork, and compete in matches",
            "Wednesdays, 3:30 PM - 5:00 PM",
            22,
            &["alex@mergington.edu"],
        ),
        Activity::new(
            "Basketball Club",
            "Learn fundamentals, run drills, and play scrimmages",
            "Mondays, 3:30 PM - 5:00 PM",
            18,
            &["taylor@mergington.edu"],
        ),
        Activity::new(
            "Art Club",
            "Explore drawing, painting, and mixed media projects",
            "Thursdays, 3:30 PM - 4:45 PM",
            16,
            &["mia@mergington.edu"],
        ),
        Activity::new(
            "Drama Club",
            "Acting workshops and rehearsals for school performances",
            "Tuesdays, 4:00 PM - 5:30 PM",
            20,
            &["liam@mergington.edu"],
        ),
        Activity::new(
            "Debate Team",
            "Develop research, argumentation, and public speaking skills",
            "Fridays, 3:30 PM - 5:00 PM",
            14,
            &["ava@mergington.edu"],
        ),
        Activity::new(
            "Math Club",
            "Solve challenging problems and prepare for competitions",
            "Wednesdays, 3:30 PM - 4:30 PM",
            24,
            &["noah@mergington.edu"],
        ),
    ]
}
