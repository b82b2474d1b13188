//! Bundled default dataset.
//!
//! Seeds every local state at startup so the UI renders real content
//! before (or without) any backend response. Entries carry fixed ids so
//! a later sync that returns the same records merges cleanly.

use crate::models::{ArtEntry, ExperienceEntry, Profile, ProjectEntry, QueryEntry, SkillEntry};

pub fn profile() -> Profile {
    Profile {
        name: "Krish".into(),
        title: "MERN Stack Developer & Artist (The Hybrid)".into(),
        location: "Jalandhar, India".into(),
        bio: "I combine technical precision with creative flair, building fast, \
              responsive web applications and designing immersive digital art. \
              Passionate about clean code and beautiful aesthetics, I specialize \
              in the MERN (MongoDB, Express, React, Node) stack for full-stack \
              development. I often stay up late coding or designing."
            .into(),
        email: "krissk439@gmail.com".into(),
        github: "https://github.com/The-Krish".into(),
        linkedin: "https://linkedin.com/in/krishna-kumar-3572b123a".into(),
        profile_image:
            "https://lh3.googleusercontent.com/a/ACg8ocIrQpUsHmDmljt1Y1avXQ5_ulbpkWue_oJd56MqPrA1UVP8VX_z=s400-c"
                .into(),
        resume_url:
            "https://docs.google.com/document/d/1vZV87UWlkbST_CMLJGiB_5Nxwzrsi62U2TuiwJjaO84/edit?usp=sharing"
                .into(),
    }
}

pub fn skills() -> Vec<SkillEntry> {
    let rows = [
        ("695d3443312bbb013f7a0639", "React.js", "Advanced", "⚛️"),
        ("693683ad10e90ecccf571d2e", "Express.js", "Advanced", "⚡"),
        ("6936840610e90ecccf571d34", "Mongodb", "Advanced", "🍃"),
        ("6936854f10e90ecccf571d5f", "Tailwind/CSS", "Advanced", "🌬️"),
        ("693688ba10e90ecccf571dd4", "Artist", "Expert", "✏️"),
    ];
    rows.into_iter()
        .map(|(id, name, level, icon)| SkillEntry {
            id: id.into(),
            name: name.into(),
            level: level.into(),
            icon: icon.into(),
        })
        .collect()
}

pub fn projects() -> Vec<ProjectEntry> {
    vec![
        ProjectEntry {
            id: "695d3bdeda0e48eb6c7a6aa3".into(),
            title: "MY-PORTFOLIO".into(),
            description: "Portfolio showcasing MERN stack projects, full-stack \
                          applications, and technical skills with live demos and \
                          source code."
                .into(),
            tags: vec!["REACT/EXPRESS/MONGODB".into()],
            github_link: Some("https://github.com/The-Krish".into()),
            demo_link: Some("https://s-port-five.vercel.app/".into()),
        },
        ProjectEntry {
            id: "69610735cd83e620dcc6b505".into(),
            title: "TO-DO APP".into(),
            description: "A simple and user-friendly Todo app that helps users \
                          organize tasks efficiently. Built with React for the \
                          frontend and a Node.js backend, focusing on clean UI and \
                          smooth user experience."
                .into(),
            tags: vec!["REACT/EXPRESS/MONGODB".into()],
            github_link: Some("https://github.com/The-Krish".into()),
            demo_link: Some("https://todoapp-1-9lqf.onrender.com/".into()),
        },
    ]
}

pub fn experiences() -> Vec<ExperienceEntry> {
    vec![
        ExperienceEntry {
            id: "693658821f11aa264d4cadf4".into(),
            year_range: "2021-2023".into(),
            title: "BCA".into(),
            institution: "Lyallpur Khalsa College".into(),
            location: "Jalandhar, India".into(),
            description: "Completed BCA from Lyallpur Khalsa College, gaining strong \
                          foundations in programming, database management, web \
                          technologies, and software development principles."
                .into(),
        },
        ExperienceEntry {
            id: "69367e2e99c3cf86310b1d39".into(),
            year_range: "2025-2026".into(),
            title: "MERN DEVELOPER".into(),
            institution: "TECHCADD".into(),
            location: "Jalandhar, India".into(),
            description: "Completed MERN Stack training at TechCadd Institute, \
                          Jalandhar, with hands-on experience in building full-stack \
                          web applications."
                .into(),
        },
        ExperienceEntry {
            id: "69588be8777667710c439d8b".into(),
            year_range: "2024-2025".into(),
            title: "FREELANCING".into(),
            institution: "Self".into(),
            location: "Remote / India".into(),
            description: "Motivated Freelance Web Developer with hands-on experience \
                          in building modern, responsive web applications using the \
                          MERN stack."
                .into(),
        },
    ]
}

pub fn art() -> Vec<ArtEntry> {
    let rows = [
        ("695d2de889d3479cfb5046bc", "KAALI", "Graphite/color"),
        ("695d2dfd89d3479cfb5046be", "JOHNNY", "Graphite"),
        ("695d2e4889d3479cfb5046e2", "OLD MAN", "Graphite/Charcol"),
        ("695d2e6489d3479cfb5046e4", "KID", "Graphite"),
        ("695d2e9689d3479cfb5046e8", "SIDHU", "Graphite"),
        ("695d2e7a89d3479cfb5046e6", "VIKRAM", "Graphite"),
    ];
    rows.into_iter()
        .map(|(id, title, medium)| ArtEntry {
            id: id.into(),
            title: title.into(),
            medium: medium.into(),
            image: format!("https://photos.example.com/art/{id}.png"),
        })
        .collect()
}

pub fn queries() -> Vec<QueryEntry> {
    Vec::new()
}
