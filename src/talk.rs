//! The "Flow & TypeScript" talk.

use crate::slide::ThemeColor::*;
use crate::slide::Transition::{Appear, Fade, Zoom};
use crate::slide::{Block, Slide, ThemeColor, Transition, code, heading, image, item, link, list};

const BUGS: &str = include_str!("../assets/bugs.example");
const OUTPUT: &str = include_str!("../assets/output.example");
const CLI_ERRORS: &str = include_str!("../assets/cli-errors.example");

const PRIMITIVES: &str = r#"
const firstName = 'Alan';
const age = 1337;
const isHotdog = true;


age.toUpperCase()
// - ^ TypeError: age.toUpperCase is not a function
"#;

const FUNCTIONS: &str = r#"
function add(x: number, y: number): number {
  return x + y;
}

add(2, 3); // Valid

add('2', '3'); // Invalid
// - ^ string. This type is incompatible with the expected param type of number
"#;

const ARRAYS: &str = r#"
function log(numbers: Array<number>) {
    // ...
}

function log(strings: Array<string>) {
    // ...
};

function log(people: Array<Person>) {
    // ...
};

function map<T, U>(elements: Array<T>, mappingFunction: (T) => U): Array<U> {
  //
};
"#;

const OBJECTS: &str = r#"
type Person = {
  firstName: string,
  lastName: string,
  age: number
}

const getName = function (person: Person) {
  return `${person.firstName} ${person.firstName}`;
};

getName({ firstName: 'a', lastName: 'b', age: 23 }); // valid

getName({ firstName: 'a', lastName: 'b' }); // invalid
//    - ^ property `age`. Property not found in object literal
"#;

const LITERALS: &str = r#"
type Planet = "mercury" | "venus" | "earth" | "etc"

function getMass(planet: Planet): number {
  switch (planet) {
    case "mercury" : return 1337;
    case "venus" : return 1337;
    case "earth"  : return 1337;
    // ... etc ...
  }
}

getMass("mercury"); // valid
getMass("pluto"); // invalid
//    - ^ string. This type is incompatible with the expected param type of Planet string enum
"#;

// Three stacked caps headings, the layout of the opening and closing slides.
fn title(first: &str, joiner: &str, second: &str) -> Slide {
    Slide::new(Primary)
        .transition(&[Zoom])
        .with(heading(1, Tertiary, first).caps())
        .with(heading(4, Quaternary, joiner).caps())
        .with(heading(1, Tertiary, second).caps())
}

fn statement(background: ThemeColor, color: ThemeColor, text: &str) -> Slide {
    Slide::new(background).transition(&[Zoom, Fade]).with(heading(4, color, text))
}

fn sample(title: &str, source: &str) -> Slide {
    statement(Primary, Tertiary, title).with(code("jsx", source))
}

fn revealed_heading(color: ThemeColor, text: &str) -> Block {
    Block::from(heading(6, color, text)).appear()
}

pub fn slides() -> Vec<Slide> {
    vec![
        title("Flow", "&", "TypeScript"),
        statement(Secondary, Tertiary, "What are they?").with(list(vec![
            item(Primary, "Command line tools").appear(),
            item(Primary, "Verify JavaScript before its run, i.e. at compile time").appear(),
            item(Primary, "Rely on explicit or inferred 'type' information").appear(),
        ])),
        Slide::new(Secondary).transition(&[Zoom, Fade]).with(list(vec![
            item(Primary, "Facebook = Flow").appear(),
            item(Primary, "Microsoft = TypeScript").appear(),
        ])),
        Slide::new(Primary).transition(&[Zoom]).with(heading(2, Tertiary, "Example")),
        Slide::new(Secondary).transition(&[Transition::Slide]).with(code("jsx", BUGS)),
        Slide::new(Secondary)
            .transition(&[Transition::Slide])
            .with(heading(4, Tertiary, "Oops..."))
            .with(code("jsx", OUTPUT))
            .with(revealed_heading(Quaternary, "Runtime issues")),
        Slide::new(Primary)
            .transition(&[Transition::Slide])
            .with(heading(4, Tertiary, "Spot the bugs?"))
            .with(code("jsx", BUGS)),
        Slide::new(Primary).transition(&[Zoom, Fade]).with(image("automated.png", 75)),
        statement(Primary, Secondary, "let's introduce..."),
        Slide::new(Primary).transition(&[Zoom, Fade]).with(image("flow-logo.jpg", 50)),
        sample("Compile time error", CLI_ERRORS).with(revealed_heading(Quaternary, "Spotted before running")),
        statement(Secondary, Tertiary, "... How?").with(revealed_heading(Primary, "Type information!")),
        sample("Primitive Types: Inferred", PRIMITIVES),
        Slide::new(Primary).transition(&[Appear]).with(heading(4, Tertiary, "Being more explicit")),
        Slide::new(Primary)
            .transition(&[Appear])
            .with(heading(4, Tertiary, "Extending the language"))
            .with(heading(4, Quaternary, "Adding additional type hints")),
        sample("Functions", FUNCTIONS),
        sample("Array Types", ARRAYS),
        sample("Object Types", OBJECTS),
        sample("Literal Types", LITERALS),
        statement(Primary, Tertiary, "Anything else?"),
        statement(Primary, Tertiary, "Editor support").with(image("invalid-name.png", 75)),
        Slide::new(Primary)
            .transition(&[Zoom, Fade])
            .with(link("https://github.com/FormidableLabs/spectacle", "REPL", Tertiary).caps()),
        statement(Secondary, Tertiary, "Want to catch bugs before production?"),
        title("Flow", "or", "TypeScript"),
        Slide::new(Primary).transition(&[Zoom]).with(heading(1, Tertiary, "le fin").caps()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slide::{AssetRef, ContentBlock};

    #[test]
    fn test_talk_shape() {
        let slides = slides();
        assert_eq!(slides.len(), 25);

        let gates: Vec<usize> = slides.iter().map(Slide::gated_steps).collect();
        assert_eq!(gates.iter().sum::<usize>(), 8);
        assert_eq!(&gates[..3], [0, 3, 2]);
        assert_eq!(gates[5], 1);
    }

    #[test]
    fn test_images_referenced_by_the_talk() {
        let slides = slides();
        let mut used: Vec<&str> = slides.iter().flat_map(Slide::assets).map(AssetRef::name).collect();
        used.sort();
        assert_eq!(used, ["automated.png", "flow-logo.jpg", "invalid-name.png"]);
    }

    #[test]
    fn test_code_samples_are_embedded_and_trimmed() {
        let slides = slides();
        let ContentBlock::Code(bugs) = &slides[4].content[0].content else {
            panic!("slide 4 should be a code pane");
        };
        assert_eq!(bugs.language, "jsx");
        assert!(bugs.source.contains("function"));
        assert_eq!(bugs.source, bugs.source.trim());
    }

    #[test]
    fn test_every_slide_declares_a_transition() {
        assert!(slides().iter().all(|s| !s.transition.is_empty()));
    }
}
